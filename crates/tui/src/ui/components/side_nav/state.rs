//! State for the side navigation tree.
//!
//! Splits the two entangled notions of "open" apart: `selected` is derived
//! from the current path and never hand-edited, while `expanded_override`
//! is written only by user toggles and cleared whenever the derived value
//! changes. The effective expansion of a group is
//! `expanded_override.unwrap_or(selected)`.

use std::collections::HashMap;

use classboard_types::{Effect, NavEntry};
use ratatui::layout::{Position, Rect};

use super::selection::{SelectionMap, resolve_selection};

/// Identifies a node by its index path from the root sequence.
///
/// Stable for the lifetime of the session because the tree is static.
pub type NodePath = Vec<usize>;

/// Per-node interaction state, owned by the tree that mounted the node.
#[derive(Debug, Clone, Copy, Default)]
struct NodeRuntime {
    /// Last derived self-or-descendant-active value.
    selected: bool,
    /// Manual expand/collapse, set only by user toggles. Cleared when
    /// `selected` changes value, so the branch containing the active item
    /// re-opens on navigation without the user expanding it by hand.
    expanded_override: Option<bool>,
}

impl NodeRuntime {
    fn effective_expanded(self) -> bool {
        self.expanded_override.unwrap_or(self.selected)
    }
}

/// State for the whole side navigation subsystem.
///
/// Owns the immutable entry tree, the derived selection map, per-node
/// runtime state, the keyboard cursor, and the hit-testing areas recorded
/// by the last render.
#[derive(Debug, Default)]
pub struct SideNavState {
    /// Navigation tree, supplied once and never mutated.
    pub entries: Vec<NavEntry>,
    /// Current location, compared against targets by exact match only.
    pub current_path: Option<String>,
    /// Derived selection map; replaced as a whole on every resync.
    pub selection: SelectionMap,
    runtime: HashMap<NodePath, NodeRuntime>,
    /// Keyboard cursor over the currently visible rows.
    pub cursor: usize,
    /// Last rendered area of the whole nav; used for outside-click detection.
    pub last_area: Rect,
    /// Per-row areas recorded by the last render, for mouse hit testing.
    pub row_areas: Vec<(Rect, NodePath)>,
}

impl SideNavState {
    /// Creates state for the given tree with no current location.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let mut state = Self {
            entries,
            ..Self::default()
        };
        state.resync();
        state
    }

    /// Updates the current location and recomputes all derived state.
    ///
    /// The selection map and every node's runtime are in their new state
    /// before this returns; no partially-updated state is ever rendered.
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = Some(path.into());
        self.resync();
    }

    /// Rebuilds the selection map and reconciles per-node runtime state.
    fn resync(&mut self) {
        self.selection = resolve_selection(&self.entries, self.current_path.as_deref());
        let mut prefix = NodePath::new();
        sync_nodes(
            &self.entries,
            self.current_path.as_deref(),
            &mut prefix,
            &mut self.runtime,
        );
    }

    /// Derived selection value for the node at `path`.
    pub fn node_selected(&self, path: &[usize]) -> bool {
        self.runtime.get(path).map(|rt| rt.selected).unwrap_or(false)
    }

    /// Effective expansion for the group at `path`.
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.runtime
            .get(path)
            .map(|rt| rt.effective_expanded())
            .unwrap_or(false)
    }

    /// Flips the expansion of the group at `path` as a manual override.
    ///
    /// The override sticks until the node's derived selection next changes
    /// value.
    pub fn toggle_expanded(&mut self, path: &[usize]) {
        let rt = self.runtime.entry(path.to_vec()).or_default();
        rt.expanded_override = Some(!rt.effective_expanded());
    }

    /// Activates the node at `path`.
    ///
    /// Groups toggle their expansion. Leaves with a target produce an
    /// outbound navigation effect, plus a close request when
    /// `close_on_activate` is set (overlay auto-dismiss). The entry's own
    /// hook always fires regardless of branch. Entries that are neither
    /// groups nor links and carry no hook are inert labels.
    pub fn activate(&mut self, path: &[usize], close_on_activate: bool) -> Vec<Effect> {
        let (has_children, target, hook) = match entry_at(&self.entries, path) {
            Some(entry) => (entry.has_children(), entry.target.clone(), entry.on_activate.clone()),
            None => return Vec::new(),
        };
        let mut effects = Vec::new();

        if has_children {
            self.toggle_expanded(path);
        } else if let Some(target) = target {
            effects.push(Effect::NavigateTo(target));
            if close_on_activate {
                effects.push(Effect::NavCloseRequested);
            }
        }

        if let Some(hook) = hook {
            hook();
        }
        effects
    }

    /// Moves the keyboard cursor by `delta`, clamped to `row_count` rows.
    pub fn move_cursor(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        let cursor = if delta >= 0 {
            self.cursor.saturating_add(delta as usize)
        } else {
            self.cursor.saturating_sub(delta.unsigned_abs())
        };
        self.cursor = cursor.min(row_count - 1);
    }

    /// Resolves a mouse position against the areas of the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, NodePath)> {
        let position = Position::new(column, row);
        self.row_areas
            .iter()
            .enumerate()
            .find(|(_, (area, _))| area.contains(position))
            .map(|(index, (_, path))| (index, path.clone()))
    }
}

/// Borrows the entry addressed by an index path.
pub fn entry_at<'a>(entries: &'a [NavEntry], path: &[usize]) -> Option<&'a NavEntry> {
    let (&first, rest) = path.split_first()?;
    let entry = entries.get(first)?;
    if rest.is_empty() {
        Some(entry)
    } else {
        entry_at(&entry.children, rest)
    }
}

/// Reconciles runtime state with freshly derived selection.
///
/// Same traversal as the resolver so per-node values agree with the map
/// even for duplicate targets. Inserting on first visit seeds a group's
/// expansion from its selection at mount time.
fn sync_nodes(
    entries: &[NavEntry],
    current_path: Option<&str>,
    prefix: &mut NodePath,
    runtime: &mut HashMap<NodePath, NodeRuntime>,
) -> bool {
    let mut any_active = false;
    for (index, entry) in entries.iter().enumerate() {
        prefix.push(index);
        let is_exact = match (entry.target.as_deref(), current_path) {
            (Some(target), Some(path)) => target == path,
            _ => false,
        };
        let child_active = if entry.children.is_empty() {
            false
        } else {
            sync_nodes(&entry.children, current_path, prefix, runtime)
        };
        let selected = is_exact || child_active;

        let rt = runtime.entry(prefix.clone()).or_insert(NodeRuntime {
            selected,
            expanded_override: None,
        });
        if rt.selected != selected {
            rt.selected = selected;
            rt.expanded_override = None;
        }

        any_active |= selected;
        prefix.pop();
    }
    any_active
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_types::NavEntry;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn reports_tree() -> Vec<NavEntry> {
        vec![
            NavEntry::link("Dashboard", "/dashboard"),
            NavEntry::group(
                "Reports",
                vec![
                    NavEntry::link("Summary", "/reports/summary"),
                    NavEntry::link("Detail", "/reports/detail"),
                ],
            ),
        ]
    }

    #[test]
    fn group_starts_expanded_when_descendant_is_active() {
        let mut state = SideNavState::new(reports_tree());
        state.set_current_path("/reports/detail");

        // Scenario B: the group has no map entry but is effectively open.
        assert!(state.selection.get("/reports").is_none());
        assert!(state.is_expanded(&[1]));
        assert!(state.node_selected(&[1]));
        assert_eq!(state.selection.get("/reports/detail"), Some(&true));
        assert_eq!(state.selection.get("/reports/summary"), Some(&false));
    }

    #[test]
    fn group_without_active_descendant_starts_collapsed() {
        let mut state = SideNavState::new(reports_tree());
        state.set_current_path("/dashboard");
        assert!(!state.is_expanded(&[1]));
    }

    #[test]
    fn selection_flip_reexpands_a_manually_collapsed_group() {
        let mut state = SideNavState::new(reports_tree());
        state.set_current_path("/reports/summary");
        assert!(state.is_expanded(&[1]));

        // User collapses the active branch by hand.
        state.toggle_expanded(&[1]);
        assert!(!state.is_expanded(&[1]));

        // Navigating away flips the group's selection to false; the
        // override is cleared and the group follows the derived value.
        state.set_current_path("/dashboard");
        assert!(!state.is_expanded(&[1]));

        // Navigating back flips selection to true again: the group opens
        // even though it was manually collapsed earlier.
        state.set_current_path("/reports/detail");
        assert!(state.is_expanded(&[1]));
    }

    #[test]
    fn manual_toggle_sticks_while_selection_value_is_unchanged() {
        let mut state = SideNavState::new(reports_tree());
        state.set_current_path("/dashboard");
        assert!(!state.is_expanded(&[1]));

        // Manual expand of an inactive group.
        state.toggle_expanded(&[1]);
        assert!(state.is_expanded(&[1]));

        // Re-resolving the same path is a no-op for the override.
        state.set_current_path("/dashboard");
        assert!(state.is_expanded(&[1]));

        // Switching between two paths that both leave the group inactive
        // does not change the derived value, so the override survives.
        state.set_current_path("/classes");
        assert!(state.is_expanded(&[1]));
    }

    #[test]
    fn activating_a_group_toggles_without_effects() {
        let mut state = SideNavState::new(reports_tree());
        let effects = state.activate(&[1], true);
        assert!(effects.is_empty());
        assert!(state.is_expanded(&[1]));
    }

    #[test]
    fn activating_a_leaf_navigates_and_requests_close_exactly_once() {
        let mut state = SideNavState::new(vec![
            NavEntry::link("Dashboard", "/dashboard"),
            NavEntry::link("Classes", "/classes"),
        ]);

        // Scenario C: overlay leaf activation.
        let effects = state.activate(&[1], true);
        assert_eq!(effects[0], Effect::NavigateTo("/classes".into()));
        let close_count = effects
            .iter()
            .filter(|e| **e == Effect::NavCloseRequested)
            .count();
        assert_eq!(close_count, 1);
    }

    #[test]
    fn leaf_activation_without_overlay_only_navigates() {
        let mut state = SideNavState::new(vec![NavEntry::link("Classes", "/classes")]);
        let effects = state.activate(&[0], false);
        assert_eq!(effects, vec![Effect::NavigateTo("/classes".into())]);
    }

    #[test]
    fn activation_hook_fires_on_every_branch() {
        let count = Arc::new(AtomicUsize::new(0));

        let hook_count = Arc::clone(&count);
        let group = NavEntry::group("Reports", vec![NavEntry::link("Summary", "/reports/summary")])
            .with_on_activate(move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            });
        let hook_count = Arc::clone(&count);
        let leaf = NavEntry::link("Classes", "/classes").with_on_activate(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        });

        let mut state = SideNavState::new(vec![group, leaf]);
        state.activate(&[0], false);
        state.activate(&[1], false);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn inert_label_produces_no_effects() {
        let mut state = SideNavState::new(vec![NavEntry::label("Section")]);
        assert!(state.activate(&[0], true).is_empty());
    }

    #[test]
    fn cursor_clamps_to_row_count() {
        let mut state = SideNavState::new(reports_tree());
        state.move_cursor(10, 2);
        assert_eq!(state.cursor, 1);
        state.move_cursor(-10, 2);
        assert_eq!(state.cursor, 0);
        state.move_cursor(1, 0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn entry_at_resolves_nested_paths() {
        let entries = reports_tree();
        assert_eq!(entry_at(&entries, &[1, 1]).map(|e| e.label.as_str()), Some("Detail"));
        assert!(entry_at(&entries, &[3]).is_none());
        assert!(entry_at(&entries, &[]).is_none());
    }
}
