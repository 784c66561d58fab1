//! Input-source monitoring driver (notifications + poll timer).

pub mod monitor;

pub use monitor::{query_snapshot, InputMethodMonitor};
