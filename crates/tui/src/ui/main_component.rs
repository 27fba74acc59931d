//! Top-level view composition and event delegation.
//!
//! Hosts the responsive layout: on wide viewports the navigation renders as
//! a rail or inline panel next to the content pane; on narrow viewports a
//! one-line top bar replaces it and the navigation becomes a togglable
//! overlay drawer above the content.

use classboard_types::{Effect, Msg, NavPositioning, SideNavVariant};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::ui::components::{Component, ContentComponent, SideNavComponent};
use crate::ui::theme::theme_helpers as th;

/// Height of the top bar shown in drawer mode; the overlay is inset below it.
pub const TOP_BAR_HEIGHT: u16 = 1;

/// Column range of the top bar's menu glyph, for mouse toggling.
const MENU_HIT_WIDTH: u16 = 3;

#[derive(Debug, Default)]
pub struct MainView {
    nav_view: SideNavComponent,
    content_view: ContentComponent,
}

impl MainView {
    fn render_top_bar(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let mut spans = th::build_hint_spans(theme, &[(" ≡ ", "Classboard  ")]);
        spans.extend(th::build_hint_spans(
            theme,
            &[("n", " menu  "), ("↑/↓", " move  "), ("Enter", " open  "), ("q", " quit")],
        ));
        let bar = Paragraph::new(Line::from(spans)).style(
            Style::default()
                .bg(theme.roles().surface_muted)
                .fg(theme.roles().text),
        );
        frame.render_widget(bar, area);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Style::default().bg(app.ctx.theme.roles().background);
        frame.render_widget(Block::default().style(background), area);

        let options = app.effective_nav_options();
        match options.variant {
            SideNavVariant::Temporary => {
                let [top_bar, body] =
                    Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(0)]).areas(area);
                Self::render_top_bar(frame, top_bar, app);
                self.content_view.render(frame, body, app);
                // Drawer last so it layers above the page content.
                self.nav_view.render(frame, area, app);
            }
            SideNavVariant::Full | SideNavVariant::Minimized => {
                let nav_width = SideNavComponent::resolved_width(&options);
                match options.positioning {
                    NavPositioning::Fixed => {
                        let [_, content_area] =
                            Layout::horizontal([Constraint::Length(nav_width), Constraint::Min(0)]).areas(area);
                        self.nav_view.render(frame, area, app);
                        self.content_view.render(frame, content_area, app);
                    }
                    NavPositioning::Absolute => {
                        // Inline panel: the nav participates in the layout of
                        // an ordinary container instead of the viewport edge.
                        let container = th::block(&*app.ctx.theme, Some("Classboard"), false);
                        let inner = container.inner(area);
                        frame.render_widget(container, area);
                        let [_, content_area] =
                            Layout::horizontal([Constraint::Length(nav_width), Constraint::Min(0)]).areas(inner);
                        self.nav_view.render(frame, inner, app);
                        self.content_view.render(frame, content_area, app);
                    }
                }
            }
        }
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('n') {
            return app.update(Msg::ToggleNavDrawer);
        }
        self.nav_view.handle_key_events(app, key)
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let options = app.effective_nav_options();
        let is_drawer_closed = options.variant == SideNavVariant::Temporary && !app.nav_open;
        if is_drawer_closed
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && mouse.row < TOP_BAR_HEIGHT
            && mouse.column < MENU_HIT_WIDTH
        {
            return vec![Effect::NavOpenRequested];
        }
        self.nav_view.handle_mouse_events(app, mouse)
    }
}
