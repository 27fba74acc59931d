//! Shared type definitions for the classboard dashboard.
//!
//! This crate carries the plain-data vocabulary shared between the CLI and
//! the TUI: the declarative navigation tree ([`nav::NavEntry`]), the message
//! and effect enums that drive the event loop, and the presentation variant
//! enums consumed by the side-navigation shell.

pub mod nav;

pub use nav::{NavEntry, NavEntrySpec, NavIcon, NavPositioning, SelectedVariant, SideNavVariant};

/// Messages that can be sent to update the application state.
///
/// Every user action and system event that mutates state flows through this
/// enum; handlers run to completion before the next event is processed.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (animations, idle housekeeping)
    Tick,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
    /// The current location changed (outbound navigation landed)
    PathChanged(String),
    /// Toggle the temporary navigation drawer
    ToggleNavDrawer,
}

/// Side effects reported by components for the runtime to execute.
///
/// Components never reach into global state; they describe what should
/// happen and the owner of that state applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to the given target path
    NavigateTo(String),
    /// The navigation overlay should dismiss (leaf selected, Esc, outside click)
    NavCloseRequested,
    /// The navigation overlay should open
    NavOpenRequested,
}
