//! Component abstraction for the classboard TUI.
//!
//! Components own local UI behavior, receive input events, and report side
//! effects instead of mutating global state directly. The runtime routes
//! events to the main view, which delegates to the component that should
//! handle them, then executes the returned `Effect`s against the app.

use classboard_types::Effect;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// A UI element with its own rendering and event handling.
pub trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that fall within this component's concern.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording hit-test areas; state changes happen in event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
