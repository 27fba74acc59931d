//! Style and widget builders shared by components.

use classboard_types::SelectedVariant;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Horizontal divider line spanning `width` cells.
pub fn divider_line<T: Theme + ?Sized>(theme: &T, width: u16) -> Line<'static> {
    Line::styled("─".repeat(width as usize), theme.divider_style())
}

/// Style for one navigation row.
///
/// `Primary` fills the row with the selection background; `TextOnly` keeps
/// the surface and recolors icon/text. The keyboard cursor adds emphasis on
/// top of either variant.
pub fn nav_row_style<T: Theme + ?Sized>(
    theme: &T,
    variant: SelectedVariant,
    selected: bool,
    cursor: bool,
) -> Style {
    let mut style = match (selected, variant) {
        (true, SelectedVariant::Primary) => theme.selection_style(),
        (true, SelectedVariant::TextOnly) => panel_style(theme).patch(theme.accent_primary_style()),
        (false, _) => panel_style(theme),
    };
    if cursor {
        style = style.fg(theme.roles().focus).add_modifier(Modifier::BOLD);
        if selected && variant == SelectedVariant::Primary {
            style = style.fg(theme.roles().selection_fg);
        }
    }
    style
}

/// Key/description hint spans for the top bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_secondary_style()));
    }
    spans
}
