//! The navigation shell: structural variant resolution and composition.
//!
//! Resolves which structural rendering to use (overlay drawer, fixed rail,
//! inline panel), computes the selection read-model once per render pass,
//! and composes the header and footer slots around the recursive node list.

use classboard_types::{Effect, NavPositioning, SelectedVariant, SideNavVariant};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::Text,
    widgets::{Clear, Paragraph},
};

use super::context::NavTreeContext;
use super::node;
use super::state::entry_at;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Presentation options for the navigation shell.
///
/// The overlay `open` boolean is deliberately not part of this struct: it is
/// owned by the app, which also consumes the close-request effects.
#[derive(Debug, Clone)]
pub struct SideNavOptions {
    pub variant: SideNavVariant,
    pub positioning: NavPositioning,
    /// Width in cells when not minimized.
    pub width: u16,
    /// Width in cells for the icon-only rail.
    pub minimized_width: u16,
    /// Vertical inset from the top of the viewport; only meaningful for the
    /// temporary variant (e.g. to sit below a fixed top bar).
    pub vertical_offset: u16,
    pub selected_variant: SelectedVariant,
    /// Slot composed above the node list, with a divider underneath.
    pub header: Option<Text<'static>>,
    /// Slot pinned below the node list, unaffected by list scrolling.
    pub footer: Option<Text<'static>>,
}

impl Default for SideNavOptions {
    fn default() -> Self {
        Self {
            variant: SideNavVariant::default(),
            positioning: NavPositioning::default(),
            width: 30,
            minimized_width: 8,
            vertical_offset: 0,
            selected_variant: SelectedVariant::default(),
            header: None,
            footer: None,
        }
    }
}

/// The side navigation shell component.
#[derive(Debug, Default)]
pub struct SideNavComponent;

impl SideNavComponent {
    /// Width the shell occupies for the given options.
    pub fn resolved_width(options: &SideNavOptions) -> u16 {
        if options.variant == SideNavVariant::Minimized {
            options.minimized_width
        } else {
            options.width
        }
    }

    /// The temporary variant always renders as an overlay, regardless of
    /// positioning: it must draw above page content and intercept outside
    /// clicks to close.
    pub fn is_overlay(variant: SideNavVariant) -> bool {
        variant == SideNavVariant::Temporary
    }

    /// Resolves the area the shell renders into, or `None` when nothing
    /// should render (closed overlay).
    ///
    /// Fixed positioning anchors to the viewport edge (`frame_area`);
    /// absolute positioning participates in the parent `container` layout.
    pub fn resolve_area(options: &SideNavOptions, open: bool, frame_area: Rect, container: Rect) -> Option<Rect> {
        match options.variant {
            SideNavVariant::Temporary => {
                if !open {
                    return None;
                }
                let offset = options.vertical_offset.min(frame_area.height);
                Some(Rect {
                    x: frame_area.x,
                    y: frame_area.y + offset,
                    width: options.width.min(frame_area.width),
                    height: frame_area.height - offset,
                })
            }
            SideNavVariant::Full | SideNavVariant::Minimized => {
                let anchor = match options.positioning {
                    NavPositioning::Fixed => frame_area,
                    NavPositioning::Absolute => container,
                };
                Some(Rect {
                    x: anchor.x,
                    y: anchor.y,
                    width: Self::resolved_width(options).min(anchor.width),
                    height: anchor.height,
                })
            }
        }
    }
}

impl Component for SideNavComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let options = app.effective_nav_options();
        let overlay = Self::is_overlay(options.variant);
        // A closed drawer renders nothing; keys must not reach the tree.
        if overlay && !app.nav_open {
            return Vec::new();
        }
        let minimized = options.variant == SideNavVariant::Minimized;
        let rows = node::visible_rows(&app.side_nav, minimized);

        match key.code {
            KeyCode::Up => app.side_nav.move_cursor(-1, rows.len()),
            KeyCode::Down => app.side_nav.move_cursor(1, rows.len()),
            KeyCode::Enter => {
                if let Some(row) = rows.get(app.side_nav.cursor) {
                    let path = row.path.clone();
                    return app.side_nav.activate(&path, overlay);
                }
            }
            KeyCode::Right => {
                if let Some(row) = rows.get(app.side_nav.cursor) {
                    let is_group = entry_at(&app.side_nav.entries, &row.path).is_some_and(|e| e.has_children());
                    if is_group && !app.side_nav.is_expanded(&row.path) {
                        let path = row.path.clone();
                        app.side_nav.toggle_expanded(&path);
                    }
                }
            }
            KeyCode::Left => {
                if let Some(row) = rows.get(app.side_nav.cursor) {
                    let is_group = entry_at(&app.side_nav.entries, &row.path).is_some_and(|e| e.has_children());
                    if is_group && app.side_nav.is_expanded(&row.path) {
                        let path = row.path.clone();
                        app.side_nav.toggle_expanded(&path);
                    }
                }
            }
            KeyCode::Esc => {
                if overlay && app.nav_open {
                    return vec![Effect::NavCloseRequested];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let options = app.effective_nav_options();
        let overlay = Self::is_overlay(options.variant);

        if let Some((index, path)) = app.side_nav.hit_test(mouse.column, mouse.row) {
            app.side_nav.cursor = index;
            return app.side_nav.activate(&path, overlay);
        }

        // Clicks outside an open overlay dismiss it.
        if overlay
            && app.nav_open
            && !app
                .side_nav
                .last_area
                .contains(Position::new(mouse.column, mouse.row))
        {
            return vec![Effect::NavCloseRequested];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let options = app.effective_nav_options();
        let Some(area) = Self::resolve_area(&options, app.nav_open, frame.area(), rect) else {
            // Closed overlay: nothing on screen, nothing to hit-test.
            app.side_nav.row_areas.clear();
            app.side_nav.last_area = Rect::default();
            return;
        };
        let overlay = Self::is_overlay(options.variant);
        let minimized = options.variant == SideNavVariant::Minimized;

        if overlay {
            frame.render_widget(Clear, area);
        }

        let theme = &*app.ctx.theme;
        let block = th::block(theme, None, overlay);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_len = options.header.as_ref().map(|t| t.height() as u16 + 1).unwrap_or(0);
        let footer_len = options.footer.as_ref().map(|t| t.height() as u16 + 1).unwrap_or(0);
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(header_len),
            Constraint::Min(0),
            Constraint::Length(footer_len),
        ])
        .areas(inner);

        if let Some(header) = &options.header {
            let [text_area, divider_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(header_area);
            frame.render_widget(Paragraph::new(header.clone()).style(th::panel_style(theme)), text_area);
            frame.render_widget(Paragraph::new(th::divider_line(theme, divider_area.width)), divider_area);
        }

        let rows = node::visible_rows(&app.side_nav, minimized);
        app.side_nav.cursor = app.side_nav.cursor.min(rows.len().saturating_sub(1));

        // One context per render pass, shared by reference down the whole
        // subtree; selection is never re-derived at a node.
        let row_areas = {
            let state = &app.side_nav;
            let ctx = NavTreeContext {
                selection: &state.selection,
                minimized,
                selected_variant: options.selected_variant,
                close_on_activate: overlay,
            };
            node::render_tree(frame, list_area, state, &ctx, theme, &rows)
        };

        if let Some(footer) = &options.footer {
            let [divider_area, text_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(footer_area);
            frame.render_widget(Paragraph::new(th::divider_line(theme, divider_area.width)), divider_area);
            frame.render_widget(Paragraph::new(footer.clone()).style(th::panel_style(theme)), text_area);
        }

        app.side_nav.row_areas = row_areas;
        app.side_nav.last_area = area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(variant: SideNavVariant, positioning: NavPositioning) -> SideNavOptions {
        SideNavOptions {
            variant,
            positioning,
            width: 30,
            minimized_width: 8,
            vertical_offset: 0,
            ..SideNavOptions::default()
        }
    }

    #[test]
    fn width_follows_the_variant() {
        let full = options(SideNavVariant::Full, NavPositioning::Fixed);
        assert_eq!(SideNavComponent::resolved_width(&full), 30);

        let minimized = options(SideNavVariant::Minimized, NavPositioning::Fixed);
        assert_eq!(SideNavComponent::resolved_width(&minimized), 8);
    }

    #[test]
    fn temporary_is_always_an_overlay() {
        assert!(SideNavComponent::is_overlay(SideNavVariant::Temporary));
        assert!(!SideNavComponent::is_overlay(SideNavVariant::Full));
        assert!(!SideNavComponent::is_overlay(SideNavVariant::Minimized));
    }

    #[test]
    fn closed_overlay_resolves_to_nothing() {
        let opts = options(SideNavVariant::Temporary, NavPositioning::Fixed);
        let frame = Rect::new(0, 0, 120, 40);
        assert_eq!(SideNavComponent::resolve_area(&opts, false, frame, frame), None);
    }

    #[test]
    fn open_overlay_applies_the_vertical_offset() {
        let mut opts = options(SideNavVariant::Temporary, NavPositioning::Absolute);
        opts.vertical_offset = 1;
        let frame = Rect::new(0, 0, 120, 40);
        // Positioning is ignored for the temporary variant.
        let area = SideNavComponent::resolve_area(&opts, true, frame, Rect::new(10, 5, 60, 20)).unwrap();
        assert_eq!(area, Rect::new(0, 1, 30, 39));
    }

    #[test]
    fn fixed_rail_anchors_to_the_viewport_edge() {
        let opts = options(SideNavVariant::Full, NavPositioning::Fixed);
        let frame = Rect::new(0, 0, 120, 40);
        let container = Rect::new(10, 5, 60, 20);
        let area = SideNavComponent::resolve_area(&opts, false, frame, container).unwrap();
        assert_eq!(area, Rect::new(0, 0, 30, 40));
    }

    #[test]
    fn absolute_panel_participates_in_container_layout() {
        let opts = options(SideNavVariant::Minimized, NavPositioning::Absolute);
        let frame = Rect::new(0, 0, 120, 40);
        let container = Rect::new(10, 5, 60, 20);
        let area = SideNavComponent::resolve_area(&opts, false, frame, container).unwrap();
        assert_eq!(area, Rect::new(10, 5, 8, 20));
    }

    #[test]
    fn closed_drawer_ignores_keyboard_input() {
        use crate::app::App;
        use crate::ui::components::side_nav::SideNavState;
        use crate::ui::theme::theme_by_id;
        use classboard_types::{Msg, NavEntry};
        use crossterm::event::KeyModifiers;

        let state = SideNavState::new(vec![
            NavEntry::link("Dashboard", "/dashboard"),
            NavEntry::link("Classes", "/classes"),
        ]);
        let mut app = App::new(state, SideNavOptions::default(), theme_by_id("slate").unwrap());
        app.update(Msg::Resize(60, 24));
        assert!(!app.nav_open);

        let mut nav = SideNavComponent;
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);

        // With the drawer closed, nothing reaches the tree.
        assert!(nav.handle_key_events(&mut app, down).is_empty());
        assert!(nav.handle_key_events(&mut app, enter).is_empty());
        assert!(app.side_nav.current_path.is_none());
        assert_eq!(app.side_nav.cursor, 0);

        // Opening it restores normal handling.
        app.update(Msg::ToggleNavDrawer);
        let effects = nav.handle_key_events(&mut app, enter);
        assert_eq!(effects.first(), Some(&Effect::NavigateTo("/dashboard".into())));
    }

    #[test]
    fn narrow_viewport_clamps_the_width() {
        let opts = options(SideNavVariant::Full, NavPositioning::Fixed);
        let frame = Rect::new(0, 0, 20, 40);
        let area = SideNavComponent::resolve_area(&opts, false, frame, frame).unwrap();
        assert_eq!(area.width, 20);
    }
}
