//! UI components: side navigation and the content pane.

pub mod component;
pub mod content;
pub mod side_nav;

pub use component::Component;
pub use content::ContentComponent;
pub use side_nav::{SideNavComponent, SideNavOptions, SideNavState};
