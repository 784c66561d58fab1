//! Data model (pure Rust, no FFI).
//!
//! Contains the config store, its persistence abstraction, and the
//! constants shared across the app.

pub mod config;
pub mod constants;
pub mod prefs;

pub use config::{FloatConfig, Rgb, ScreenFrame};
pub use prefs::{MemoryPrefs, PrefsStore};
