//! Application event system (pure Rust, no FFI).

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
