//! Recursive rendering of navigation entries.
//!
//! The tree is flattened by structural recursion over the immutable entry
//! forest: each entry contributes a row, and an expanded, non-minimized
//! group recurses into its children one indent level deeper. Rendering then
//! draws one line per visible row and records per-row areas for mouse hit
//! testing.

use classboard_types::NavEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use super::context::NavTreeContext;
use super::state::{NodePath, SideNavState, entry_at};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::fit_to_width;

/// Indicator glyphs for expandable groups; orientation mirrors expansion.
const INDICATOR_EXPANDED: &str = "▾";
const INDICATOR_COLLAPSED: &str = "▸";

/// One visible row of the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub path: NodePath,
    pub depth: u16,
}

/// Flattens the tree into its currently visible rows.
///
/// A group's children are visible only when the group is effectively
/// expanded and the tree is not minimized (icon-only mode renders top-level
/// rows exclusively, matching the collapsed rail).
pub fn visible_rows(state: &SideNavState, minimized: bool) -> Vec<NavRow> {
    let mut rows = Vec::new();
    let mut prefix = NodePath::new();
    collect_rows(&state.entries, state, minimized, 0, &mut prefix, &mut rows);
    rows
}

fn collect_rows(
    entries: &[NavEntry],
    state: &SideNavState,
    minimized: bool,
    depth: u16,
    prefix: &mut NodePath,
    rows: &mut Vec<NavRow>,
) {
    for (index, entry) in entries.iter().enumerate() {
        prefix.push(index);
        rows.push(NavRow {
            path: prefix.clone(),
            depth,
        });
        if entry.has_children() && !minimized && state.is_expanded(prefix) {
            collect_rows(&entry.children, state, minimized, depth + 1, prefix, rows);
        }
        prefix.pop();
    }
}

/// Builds the text content of one row, before styling.
///
/// Layout: one cell of padding, two cells of indent per depth level, the
/// icon region (selector icons receive the selection state), the label
/// unless minimized, and a right-aligned expand indicator for groups.
pub fn row_text(entry: &NavEntry, row: &NavRow, ctx: &NavTreeContext, expanded: bool, width: u16) -> String {
    let selected = ctx.is_selected(entry.target.as_deref());
    let width = width as usize;

    let mut text = String::from(" ");
    text.push_str(&"  ".repeat(row.depth as usize));

    if let Some(icon) = &entry.icon {
        text.push_str(&icon.glyph(selected));
        if !ctx.minimized {
            text.push(' ');
        }
    } else if ctx.minimized {
        // Icon-only mode falls back to the label's first character.
        if let Some(first) = entry.label.chars().next() {
            text.push(first);
        }
    }

    if !ctx.minimized {
        text.push_str(&entry.label);
    }

    let show_indicator = entry.has_children() && !ctx.minimized;
    let body_width = if show_indicator { width.saturating_sub(2) } else { width };
    let mut text = fit_to_width(&text, body_width);

    if show_indicator {
        let pad = body_width.saturating_sub(unicode_width::UnicodeWidthStr::width(text.as_str()));
        text.push_str(&" ".repeat(pad));
        text.push_str(if expanded { INDICATOR_EXPANDED } else { INDICATOR_COLLAPSED });
    }
    text
}

/// Styled line for one row.
pub fn row_line(
    entry: &NavEntry,
    row: &NavRow,
    ctx: &NavTreeContext,
    state: &SideNavState,
    theme: &dyn Theme,
    is_cursor: bool,
    width: u16,
) -> Line<'static> {
    let expanded = state.is_expanded(&row.path);
    let text = row_text(entry, row, ctx, expanded, width);
    let style = if entry.is_interactive() {
        let selected = ctx.is_selected(entry.target.as_deref());
        th::nav_row_style(theme, ctx.selected_variant, selected, is_cursor)
    } else {
        theme.text_muted_style()
    };
    Line::styled(text, style)
}

/// Draws the visible rows into `area` and returns their hit-test areas.
///
/// The keyboard cursor is kept in view by a simple follow offset; the
/// header and footer slots outside `area` are unaffected.
pub fn render_tree(
    frame: &mut Frame,
    area: Rect,
    state: &SideNavState,
    ctx: &NavTreeContext,
    theme: &dyn Theme,
    rows: &[NavRow],
) -> Vec<(Rect, NodePath)> {
    let mut areas = Vec::with_capacity(rows.len());
    if area.height == 0 || area.width == 0 {
        return areas;
    }

    let height = area.height as usize;
    let offset = state.cursor.saturating_sub(height.saturating_sub(1)).min(rows.len().saturating_sub(1));

    for (visible_index, row) in rows.iter().enumerate().skip(offset).take(height) {
        let Some(entry) = entry_at(&state.entries, &row.path) else {
            continue;
        };
        let row_area = Rect {
            x: area.x,
            y: area.y + (visible_index - offset) as u16,
            width: area.width,
            height: 1,
        };
        let is_cursor = visible_index == state.cursor;
        let line = row_line(entry, row, ctx, state, theme, is_cursor, row_area.width);
        frame.render_widget(Paragraph::new(line), row_area);
        areas.push((row_area, row.path.clone()));
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_types::{NavEntry, SelectedVariant};

    fn tree() -> Vec<NavEntry> {
        vec![
            NavEntry::link("Dashboard", "/dashboard").with_icon("◆"),
            NavEntry::group(
                "Reports",
                vec![
                    NavEntry::link("Summary", "/reports/summary"),
                    NavEntry::link("Detail", "/reports/detail"),
                ],
            ),
        ]
    }

    fn ctx<'a>(state: &'a SideNavState, minimized: bool) -> NavTreeContext<'a> {
        NavTreeContext {
            selection: &state.selection,
            minimized,
            selected_variant: SelectedVariant::TextOnly,
            close_on_activate: false,
        }
    }

    #[test]
    fn collapsed_group_hides_children() {
        let mut state = SideNavState::new(tree());
        state.set_current_path("/dashboard");
        let rows = visible_rows(&state, false);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].path, vec![1]);
    }

    #[test]
    fn expanded_group_shows_children_indented() {
        let mut state = SideNavState::new(tree());
        state.set_current_path("/reports/detail");
        let rows = visible_rows(&state, false);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].path, vec![1, 0]);
        assert_eq!(rows[2].depth, 1);
    }

    #[test]
    fn minimized_mode_suppresses_children_and_labels() {
        let mut state = SideNavState::new(tree());
        state.set_current_path("/reports/detail");
        let rows = visible_rows(&state, true);
        assert_eq!(rows.len(), 2);

        let context = ctx(&state, true);
        let entry = entry_at(&state.entries, &rows[0].path).unwrap();
        let text = row_text(entry, &rows[0], &context, false, 6);
        assert!(text.contains('◆'));
        assert!(!text.contains("Dashboard"));
    }

    #[test]
    fn indicator_orientation_mirrors_expansion() {
        let mut state = SideNavState::new(tree());
        state.set_current_path("/reports/detail");
        let context = ctx(&state, false);
        let rows = visible_rows(&state, false);
        let group = entry_at(&state.entries, &rows[1].path).unwrap();

        let open = row_text(group, &rows[1], &context, true, 24);
        assert!(open.ends_with(INDICATOR_EXPANDED));
        let closed = row_text(group, &rows[1], &context, false, 24);
        assert!(closed.ends_with(INDICATOR_COLLAPSED));
    }

    #[test]
    fn icon_selector_sees_selection_state() {
        let entries = vec![
            NavEntry::link("Dashboard", "/dashboard")
                .with_icon_selector(|selected| if selected { "●" } else { "○" }.to_string()),
        ];
        let mut state = SideNavState::new(entries);
        state.set_current_path("/dashboard");
        let context = ctx(&state, false);
        let rows = visible_rows(&state, false);
        let entry = entry_at(&state.entries, &rows[0].path).unwrap();
        let text = row_text(entry, &rows[0], &context, false, 24);
        assert!(text.contains('●'));
    }
}
