//! Selection resolution for the navigation tree.
//!
//! The only source of truth for selection is the static tree plus the
//! current path. The map produced here is derived state: it is rebuilt as a
//! whole on every path change and never mutated in place.

use classboard_types::NavEntry;
use indexmap::IndexMap;

/// Target path → "self or a descendant is active", one entry per distinct
/// `target` anywhere in the tree.
pub type SelectionMap = IndexMap<String, bool>;

/// Computes the selection map for `entries` against `current_path`.
///
/// Depth-first: children are resolved before the parent's own map write, so
/// a group is marked active when any descendant matches. Entries without a
/// target contribute no map entry but still propagate activity upward.
/// Comparison is exact; no prefix or glob matching. A `None` or unmatched
/// path yields an all-false map. Duplicate targets are not deduplicated; the
/// last writer in traversal order wins.
pub fn resolve_selection(entries: &[NavEntry], current_path: Option<&str>) -> SelectionMap {
    let mut map = SelectionMap::new();
    walk(entries, current_path, &mut map);
    map
}

fn walk(entries: &[NavEntry], current_path: Option<&str>, map: &mut SelectionMap) -> bool {
    let mut found = false;
    for entry in entries {
        let is_exact = match (entry.target.as_deref(), current_path) {
            (Some(target), Some(path)) => target == path,
            _ => false,
        };
        let child_active = if entry.children.is_empty() {
            false
        } else {
            walk(&entry.children, current_path, map)
        };
        let selected = is_exact || child_active;
        if let Some(target) = &entry.target {
            map.insert(target.clone(), selected);
        }
        found |= selected;
    }
    found
}
