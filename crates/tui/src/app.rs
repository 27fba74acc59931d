//! Application state and logic for the classboard TUI.
//!
//! The app owns all cross-component state: the navigation tree and its
//! derived selection, the configured presentation options, the overlay
//! `open` flag, and the viewport. The responsive layout policy (narrow
//! viewports force the temporary drawer) lives here as well; everything is
//! updated to completion per event before the next render is observed.

use classboard_types::{Effect, Msg, SideNavVariant};

use crate::ui::components::side_nav::{SideNavOptions, SideNavState};
use crate::ui::main_component::TOP_BAR_HEIGHT;
use crate::ui::theme::Theme;

/// Viewports narrower than this switch to the temporary overlay drawer.
pub const NARROW_VIEWPORT_COLS: u16 = 80;

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active theme for every component.
    pub theme: Box<dyn Theme>,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);
        Self { theme, debug_enabled }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context (theme, config flags).
    pub ctx: SharedCtx,
    /// Side navigation tree, selection, and interaction state.
    pub side_nav: SideNavState,
    /// Presentation options as configured at launch.
    pub nav_options: SideNavOptions,
    /// Overlay visibility; only meaningful when the effective variant is
    /// temporary. Owned here, mutated only through effects and messages.
    pub nav_open: bool,
    /// Terminal size in (columns, rows).
    pub viewport: (u16, u16),
    dirty: bool,
}

impl App {
    pub fn new(side_nav: SideNavState, nav_options: SideNavOptions, theme: Box<dyn Theme>) -> Self {
        Self {
            ctx: SharedCtx::new(theme),
            side_nav,
            nav_options,
            nav_open: false,
            viewport: (0, 0),
            dirty: true,
        }
    }

    /// Whether the viewport forces the overlay drawer.
    pub fn is_narrow(&self) -> bool {
        self.viewport.0 > 0 && self.viewport.0 < NARROW_VIEWPORT_COLS
    }

    /// Presentation options for the current viewport.
    ///
    /// On narrow viewports the configured variant is overridden to the
    /// temporary drawer. The main view draws the top bar whenever the
    /// effective variant is temporary, so the drawer is always inset below
    /// it, configured or forced. Everything else passes through unchanged.
    pub fn effective_nav_options(&self) -> SideNavOptions {
        let mut options = self.nav_options.clone();
        if self.is_narrow() {
            options.variant = SideNavVariant::Temporary;
        }
        if options.variant == SideNavVariant::Temporary {
            options.vertical_offset = options.vertical_offset.max(TOP_BAR_HEIGHT);
        }
        options
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(cols, rows) => {
                let was_temporary = self.effective_nav_options().variant == SideNavVariant::Temporary;
                self.viewport = (cols, rows);
                let is_temporary = self.effective_nav_options().variant == SideNavVariant::Temporary;
                // Leaving drawer mode drops any stale open state.
                if was_temporary && !is_temporary {
                    self.nav_open = false;
                }
                self.mark_dirty();
            }
            Msg::PathChanged(path) => {
                tracing::debug!(%path, "current path changed");
                self.side_nav.set_current_path(path);
                self.mark_dirty();
            }
            Msg::ToggleNavDrawer => {
                if self.effective_nav_options().variant == SideNavVariant::Temporary {
                    self.nav_open = !self.nav_open;
                    self.mark_dirty();
                }
            }
        }
        Vec::new()
    }

    /// Executes effects reported by components.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::NavigateTo(target) => {
                    self.update(Msg::PathChanged(target));
                }
                Effect::NavCloseRequested => {
                    self.nav_open = false;
                    self.mark_dirty();
                }
                Effect::NavOpenRequested => {
                    self.nav_open = true;
                    self.mark_dirty();
                }
            }
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consumes the dirty flag; the runtime draws only when this was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_types::NavEntry;
    use crate::ui::theme::theme_by_id;

    fn app() -> App {
        let state = SideNavState::new(vec![
            NavEntry::link("Dashboard", "/dashboard"),
            NavEntry::link("Students", "/students"),
            NavEntry::link("Classes", "/classes"),
        ]);
        App::new(state, SideNavOptions::default(), theme_by_id("slate").unwrap())
    }

    #[test]
    fn narrow_viewport_forces_the_temporary_drawer() {
        let mut app = app();
        app.update(Msg::Resize(60, 24));
        let options = app.effective_nav_options();
        assert_eq!(options.variant, SideNavVariant::Temporary);
        assert_eq!(options.vertical_offset, TOP_BAR_HEIGHT);
    }

    #[test]
    fn widening_the_viewport_restores_the_configured_variant_and_closes() {
        let mut app = app();
        app.update(Msg::Resize(60, 24));
        app.update(Msg::ToggleNavDrawer);
        assert!(app.nav_open);

        app.update(Msg::Resize(120, 40));
        assert_eq!(app.effective_nav_options().variant, SideNavVariant::Full);
        assert!(!app.nav_open);
    }

    #[test]
    fn configured_temporary_drawer_sits_below_the_top_bar() {
        let state = SideNavState::new(vec![NavEntry::link("Dashboard", "/dashboard")]);
        let options = SideNavOptions {
            variant: SideNavVariant::Temporary,
            ..SideNavOptions::default()
        };
        let mut app = App::new(state, options, theme_by_id("slate").unwrap());

        // Wide viewport, drawer configured rather than forced: the top bar
        // is still drawn, so the overlay must sit below it.
        app.update(Msg::Resize(120, 40));
        let effective = app.effective_nav_options();
        assert_eq!(effective.variant, SideNavVariant::Temporary);
        assert_eq!(effective.vertical_offset, TOP_BAR_HEIGHT);
    }

    #[test]
    fn drawer_toggle_is_ignored_outside_temporary_mode() {
        let mut app = app();
        app.update(Msg::Resize(120, 40));
        app.update(Msg::ToggleNavDrawer);
        assert!(!app.nav_open);
    }

    #[test]
    fn leaf_activation_effects_navigate_and_dismiss_the_drawer() {
        let mut app = app();
        app.update(Msg::Resize(60, 24));
        app.update(Msg::ToggleNavDrawer);

        // Scenario C, end to end: activate a leaf under the overlay and
        // route the resulting effects through the app.
        let effects = app.side_nav.activate(&[2], true);
        app.apply_effects(effects);
        assert_eq!(app.side_nav.current_path.as_deref(), Some("/classes"));
        assert_eq!(app.side_nav.selection.get("/classes"), Some(&true));
        assert!(!app.nav_open);
    }
}
