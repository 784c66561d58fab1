//! Platform-specific implementations.
//!
//! All FFI lives below this module: bindings to Cocoa, Carbon Text Input
//! Source Services and CoreText, the NSUserDefaults storage backend, the
//! input-source monitor driver, and the overlay window layer.

#[cfg(target_os = "macos")]
pub mod macos;
