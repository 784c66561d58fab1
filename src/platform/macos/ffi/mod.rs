//! FFI bindings for macOS frameworks.
//!
//! This module encapsulates all `extern "C"` declarations and types
//! needed to interact with Carbon (Text Input Source Services), CoreText,
//! CoreFoundation, and Cocoa.

pub mod bridge;
pub mod cocoa_utils;
pub mod coretext;
pub mod text_input;

// Re-exports for convenient access
pub use cocoa_utils::*;
pub use coretext::*;
pub use text_input::*;
