//! Event handling and dispatch.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, AppContext};
