//! UI components: the overlay badge and the window synchronizer.

pub mod overlay;
pub mod window_sync;

pub use overlay::{
    apply_config_to_view, make_indicator_window, register_and_create_view, set_view_symbol,
    show_indicator_window,
};
pub use window_sync::WindowSynchronizer;
