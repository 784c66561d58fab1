//! The always-on-top indicator badge: window, view, and drawing.

pub mod drawing;
pub mod view;
pub mod window;

pub use view::{apply_config_to_view, register_and_create_view, set_view_symbol};
pub use window::{make_indicator_window, show_indicator_window};
