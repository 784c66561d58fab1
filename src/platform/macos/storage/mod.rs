//! Storage layer: NSUserDefaults persistence.

pub mod preferences;

pub use preferences::UserDefaultsPrefs;
