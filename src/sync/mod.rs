//! Window/config synchronization primitives (pure Rust, no FFI).

pub mod debounce;

pub use debounce::PositionDebouncer;
