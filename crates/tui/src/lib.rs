//! # Classboard TUI library
//!
//! A terminal dashboard for classroom attendance and mood analytics. The
//! heart of the crate is the hierarchical side navigation: a declarative
//! entry tree plus the current path is turned into derived selection state,
//! per-node expand/collapse state, and one of three structural renderings
//! (overlay drawer, fixed rail, inline panel).
//!
//! ## Architecture
//!
//! Component-based: the side navigation and the content pane each handle
//! their own events and rendering, report side effects, and share state
//! through [`app::App`]. The runtime owns the terminal and the event loop.

pub mod app;
pub mod ui;

use anyhow::Result;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};

use classboard_types::NavEntry;
pub use ui::components::side_nav::{SideNavOptions, SideNavState};
pub use ui::theme::{DEFAULT_THEME, available_ids, theme_by_id};

/// Everything needed to start the dashboard.
pub struct Launch {
    /// Navigation tree, supplied once at composition.
    pub entries: Vec<NavEntry>,
    /// Presentation options for the navigation shell.
    pub options: SideNavOptions,
    /// Theme id from the catalog.
    pub theme_id: String,
    /// Initial location.
    pub start_path: String,
}

/// Runs the dashboard until the user quits.
pub async fn run(launch: Launch) -> Result<()> {
    let theme = ui::theme::theme_by_id(&launch.theme_id)?;

    let mut options = launch.options;
    if options.header.is_none() {
        options.header = Some(brand_header());
    }
    if options.footer.is_none() {
        options.footer = Some(brand_footer());
    }

    let mut side_nav = SideNavState::new(launch.entries);
    side_nav.set_current_path(launch.start_path);

    let app = app::App::new(side_nav, options, theme);
    ui::runtime::run_app(app).await
}

/// The default navigation tree for the dashboard.
pub fn default_nav_config() -> Vec<NavEntry> {
    vec![
        NavEntry::link("Dashboard", "/dashboard")
            .with_icon_selector(|selected| if selected { "◆" } else { "◇" }.to_string()),
        NavEntry::link("Students", "/students").with_icon("☺"),
        NavEntry::link("Classes", "/classes").with_icon("▤"),
        NavEntry::group(
            "Reports",
            vec![
                NavEntry::link("Summary", "/reports/summary"),
                NavEntry::link("Detail", "/reports/detail"),
            ],
        )
        .with_icon("≣"),
    ]
}

fn brand_header() -> Text<'static> {
    Text::from(vec![
        Line::styled(" ◈ Classboard", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(" attendance & mood"),
    ])
}

fn brand_footer() -> Text<'static> {
    Text::from(Line::styled(
        " q quit · n menu",
        Style::default().add_modifier(Modifier::DIM),
    ))
}
