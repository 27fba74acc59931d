//! Content pane: thin page rendering for the current location.
//!
//! Pages are presentational glue around embedded sample data; the
//! navigation core treats them as external collaborators and only supplies
//! the current path.

use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};
use serde_json::{Value, json};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

static SAMPLE: Lazy<Value> = Lazy::new(|| {
    json!({
        "students": [
            { "name": "Ada Mensah",    "class": "5A", "attendance": 0.97, "mood": "engaged" },
            { "name": "Tomás Rivera",  "class": "5A", "attendance": 0.91, "mood": "calm" },
            { "name": "Yuki Tanaka",   "class": "5B", "attendance": 0.88, "mood": "tired" },
            { "name": "Lena Fischer",  "class": "5B", "attendance": 0.95, "mood": "engaged" },
            { "name": "Omar Haddad",   "class": "6A", "attendance": 0.84, "mood": "distracted" }
        ],
        "classes": [
            { "name": "5A", "students": 24, "attendance": 0.94 },
            { "name": "5B", "students": 22, "attendance": 0.91 },
            { "name": "6A", "students": 26, "attendance": 0.89 }
        ]
    })
});

/// Renders the page addressed by the current path.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    fn render_dashboard(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let students = SAMPLE["students"].as_array().map(Vec::len).unwrap_or(0);
        let classes = SAMPLE["classes"].as_array().map(Vec::len).unwrap_or(0);
        let average = SAMPLE["students"]
            .as_array()
            .map(|list| {
                let sum: f64 = list.iter().filter_map(|s| s["attendance"].as_f64()).sum();
                if list.is_empty() { 0.0 } else { sum / list.len() as f64 }
            })
            .unwrap_or(0.0);

        let lines = vec![
            Line::styled("Overview", theme.accent_emphasis_style()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Students tracked:  ", theme.text_secondary_style()),
                Span::styled(students.to_string(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("Classes:           ", theme.text_secondary_style()),
                Span::styled(classes.to_string(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("Avg attendance:    ", theme.text_secondary_style()),
                Span::styled(format!("{:.0}%", average * 100.0), theme.text_primary_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_students(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let rows: Vec<Row> = SAMPLE["students"]
            .as_array()
            .into_iter()
            .flatten()
            .map(|s| {
                Row::new(vec![
                    s["name"].as_str().unwrap_or("-").to_string(),
                    s["class"].as_str().unwrap_or("-").to_string(),
                    format!("{:.0}%", s["attendance"].as_f64().unwrap_or(0.0) * 100.0),
                    s["mood"].as_str().unwrap_or("-").to_string(),
                ])
                .style(theme.text_primary_style())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(10),
            ],
        )
        .header(Row::new(vec!["Student", "Class", "Att.", "Mood"]).style(theme.text_secondary_style()));
        frame.render_widget(table, area);
    }

    fn render_classes(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let rows: Vec<Row> = SAMPLE["classes"]
            .as_array()
            .into_iter()
            .flatten()
            .map(|c| {
                Row::new(vec![
                    c["name"].as_str().unwrap_or("-").to_string(),
                    c["students"].as_u64().unwrap_or(0).to_string(),
                    format!("{:.0}%", c["attendance"].as_f64().unwrap_or(0.0) * 100.0),
                ])
                .style(theme.text_primary_style())
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Length(8), Constraint::Length(10), Constraint::Length(6)],
        )
        .header(Row::new(vec!["Class", "Students", "Att."]).style(theme.text_secondary_style()));
        frame.render_widget(table, area);
    }

    fn render_placeholder(frame: &mut Frame, area: Rect, theme: &dyn Theme, text: String) {
        frame.render_widget(Paragraph::new(Line::styled(text, theme.text_muted_style())), area);
    }
}

impl Component for ContentComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, app.side_nav.current_path.as_deref(), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        match app.side_nav.current_path.as_deref() {
            Some("/dashboard") => Self::render_dashboard(frame, inner, theme),
            Some("/students") => Self::render_students(frame, inner, theme),
            Some("/classes") => Self::render_classes(frame, inner, theme),
            Some("/reports/summary") => Self::render_placeholder(
                frame,
                inner,
                theme,
                "Weekly summary: attendance steady, mood trending engaged.".into(),
            ),
            Some("/reports/detail") => Self::render_placeholder(
                frame,
                inner,
                theme,
                "Per-lesson detail is exported nightly; see the summary for totals.".into(),
            ),
            Some(other) => Self::render_placeholder(frame, inner, theme, format!("No page at {other}")),
            None => Self::render_placeholder(frame, inner, theme, "Select a page from the navigation.".into()),
        }
    }
}
