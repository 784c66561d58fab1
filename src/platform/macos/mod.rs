//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to Cocoa, Carbon (Text Input Source Services), CoreText
//! - The overlay window, indicator view, and window synchronizer
//! - The input-source monitor driver (notifications + poll timer)
//! - Storage (NSUserDefaults persistence)

pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

pub use ffi::bridge;
