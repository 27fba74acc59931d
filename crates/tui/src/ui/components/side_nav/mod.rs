//! Hierarchical side navigation.
//!
//! Turns a declarative tree of entries plus the current location into a
//! derived selection state, per-node expand/collapse interaction state, and
//! one of several structural renderings (overlay drawer, fixed rail, inline
//! panel).

pub mod context;
pub mod node;
pub mod selection;
pub mod side_nav_component;
pub mod state;

pub use context::NavTreeContext;
pub use selection::{SelectionMap, resolve_selection};
pub use side_nav_component::{SideNavComponent, SideNavOptions};
pub use state::{NodePath, SideNavState};
