//! Shared read-model handed down the navigation tree.

use classboard_types::SelectedVariant;

use super::selection::SelectionMap;

/// Ambient state for one render pass of the navigation tree.
///
/// Built once by the shell and carried by reference into every recursive
/// call, so selection is never re-derived at a node and the recursion does
/// not thread half a dozen parameters. Descendants only read it; the owning
/// shell replaces it wholesale when inputs change.
pub struct NavTreeContext<'a> {
    /// Derived selection state for every declared target.
    pub selection: &'a SelectionMap,
    /// Icon-only rendering: labels, expand indicators, and children are
    /// suppressed.
    pub minimized: bool,
    /// Styling applied to selected rows.
    pub selected_variant: SelectedVariant,
    /// Whether activating a leaf should also request that the overlay
    /// dismiss (the temporary variant auto-closes after a selection).
    pub close_on_activate: bool,
}

impl NavTreeContext<'_> {
    /// Selection state for a target path; absent targets are never selected.
    pub fn is_selected(&self, target: Option<&str>) -> bool {
        target
            .and_then(|path| self.selection.get(path))
            .copied()
            .unwrap_or(false)
    }
}
