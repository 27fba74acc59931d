//! Declarative navigation tree configuration.
//!
//! A navigation tree is a finite, acyclic, ordered forest of [`NavEntry`]
//! values supplied once at shell composition and never mutated afterwards.
//! Each entry is owned exclusively by its parent's `children` vector (or by
//! the root slice); sharing a node between two parents is a caller error and
//! is not detected here.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Produces an icon glyph from the current selection state.
pub type IconSelector = Arc<dyn Fn(bool) -> String + Send + Sync>;

/// Side-effecting callback fired whenever an entry is activated.
pub type ActivateHook = Arc<dyn Fn() + Send + Sync>;

/// Icon capability for a navigation entry.
///
/// Either a fixed glyph or a pure function of the selection state, which
/// enables state-dependent iconography (filled vs. outline).
#[derive(Clone)]
pub enum NavIcon {
    /// A fixed glyph (e.g. "◆", "▤"). Prefer non-emoji symbols for
    /// consistent terminal rendering.
    Static(String),
    /// A selector invoked with `selected` on every render.
    Selector(IconSelector),
}

impl NavIcon {
    /// Resolves the glyph for the given selection state.
    pub fn glyph(&self, selected: bool) -> String {
        match self {
            NavIcon::Static(glyph) => glyph.clone(),
            NavIcon::Selector(select) => select(selected),
        }
    }
}

impl fmt::Debug for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavIcon::Static(glyph) => f.debug_tuple("Static").field(glyph).finish(),
            NavIcon::Selector(_) => f.write_str("Selector(..)"),
        }
    }
}

/// One node in the navigation configuration tree.
#[derive(Clone, Default)]
pub struct NavEntry {
    /// Text displayed for the entry.
    pub label: String,
    /// Navigable path; absent for group headers that only toggle children.
    pub target: Option<String>,
    /// Optional icon, static or selection-dependent.
    pub icon: Option<NavIcon>,
    /// Child entries; presence makes this an expandable group.
    pub children: Vec<NavEntry>,
    /// Fired on every activation, in addition to navigation or toggling.
    pub on_activate: Option<ActivateHook>,
}

impl fmt::Debug for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavEntry")
            .field("label", &self.label)
            .field("target", &self.target)
            .field("icon", &self.icon)
            .field("children", &self.children)
            .field("on_activate", &self.on_activate.as_ref().map(|_| ".."))
            .finish()
    }
}

impl NavEntry {
    /// Creates a leaf entry that navigates to `target`.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Creates a group header whose only behavior is toggling `children`.
    pub fn group(label: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            label: label.into(),
            children,
            ..Self::default()
        }
    }

    /// Creates a plain label with no target and no children.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets a static icon glyph.
    pub fn with_icon(mut self, glyph: impl Into<String>) -> Self {
        self.icon = Some(NavIcon::Static(glyph.into()));
        self
    }

    /// Sets a selection-dependent icon selector.
    pub fn with_icon_selector(mut self, select: impl Fn(bool) -> String + Send + Sync + 'static) -> Self {
        self.icon = Some(NavIcon::Selector(Arc::new(select)));
        self
    }

    /// Attaches an activation hook.
    pub fn with_on_activate(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(hook));
        self
    }

    /// Whether this entry is an expandable group.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// An entry with no children, no target, and no hook renders as a
    /// non-interactive label. Not an error, a valid degenerate case.
    pub fn is_interactive(&self) -> bool {
        self.has_children() || self.target.is_some() || self.on_activate.is_some()
    }
}

/// Serializable form of a navigation entry.
///
/// Mirrors the JSON shape accepted by `--nav-config`: label, optional target
/// path, optional icon glyph, and nested children. Icon selectors and
/// activation hooks are code, not data, so they have no serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntrySpec {
    pub label: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<NavEntrySpec>,
}

impl NavEntrySpec {
    /// Converts the declarative spec into a runtime entry.
    pub fn into_entry(self) -> NavEntry {
        NavEntry {
            label: self.label,
            target: self.target,
            icon: self.icon.map(NavIcon::Static),
            children: self.children.into_iter().map(NavEntrySpec::into_entry).collect(),
            on_activate: None,
        }
    }
}

/// Structural rendering variants for the side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideNavVariant {
    /// Always open, full width.
    #[default]
    Full,
    /// Always open, icon-only width.
    Minimized,
    /// Overlay drawer, togglable; renders above page content.
    Temporary,
}

/// How a persistent (non-temporary) side navigation is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPositioning {
    /// Anchored to the viewport edge as a persistent rail.
    #[default]
    Fixed,
    /// Occupies normal in-flow space inside its container.
    Absolute,
}

/// Styling applied to the row of a selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedVariant {
    /// Filled background highlight on the whole row.
    Primary,
    /// Color-only emphasis on icon and text.
    #[default]
    TextOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_round_trips_into_entry() {
        let json = r#"{
            "label": "Reports",
            "children": [
                { "label": "Summary", "target": "/reports/summary", "icon": "▤" },
                { "label": "Detail", "target": "/reports/detail" }
            ]
        }"#;

        let spec: NavEntrySpec = serde_json::from_str(json).expect("deserialize NavEntrySpec");
        let entry = spec.into_entry();
        assert_eq!(entry.label, "Reports");
        assert!(entry.target.is_none());
        assert!(entry.has_children());
        assert_eq!(entry.children.len(), 2);
        assert_eq!(entry.children[0].target.as_deref(), Some("/reports/summary"));
        match &entry.children[0].icon {
            Some(NavIcon::Static(glyph)) => assert_eq!(glyph, "▤"),
            other => panic!("expected static icon, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_entry_is_not_interactive() {
        let entry = NavEntry::label("Section");
        assert!(!entry.is_interactive());

        let with_hook = NavEntry::label("Section").with_on_activate(|| {});
        assert!(with_hook.is_interactive());
    }

    #[test]
    fn icon_selector_receives_selection_state() {
        let entry = NavEntry::link("Dashboard", "/dashboard")
            .with_icon_selector(|selected| if selected { "●" } else { "○" }.to_string());
        let icon = entry.icon.as_ref().expect("icon");
        assert_eq!(icon.glyph(true), "●");
        assert_eq!(icon.glyph(false), "○");
    }
}
