//! Input-source detection (pure Rust, no FFI).
//!
//! The classifier maps a snapshot of the active input source to one of the
//! display symbols; the monitor core gates publishes so redundant triggers
//! collapse into a single observable update.

pub mod classify;
pub mod monitor;

pub use classify::{classify, DisplaySymbol, InputSourceSnapshot};
pub use monitor::MonitorCore;
