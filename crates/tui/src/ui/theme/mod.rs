//! Theme system: semantic roles, style builders, and the static catalog.

pub mod catalog;
pub mod roles;
pub mod theme_helpers;

pub use catalog::{DEFAULT_THEME, ThemeError, available_ids, theme_by_id};
pub use roles::{Theme, ThemeRoles};
