//! Application events for inter-module communication.
//!
//! Events flow from producers (the input-source monitor, the config store,
//! the window-move observer) through the EventBus to the dispatcher, which
//! applies them to the window and the indicator view. This module is pure
//! Rust with no FFI dependencies, making it fully testable.

use crate::input::DisplaySymbol;

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The published display symbol changed (monitor publish gate passed).
    SymbolChanged(DisplaySymbol),

    /// A config store field was committed; observers recompute the window
    /// frame and the view's appearance from the store.
    ConfigChanged,

    /// The user finished a discrete window move; `x`/`y` is the new origin.
    /// Feeds the debounced position save, never a direct write.
    WindowMoved { x: f64, y: f64 },
}

impl AppEvent {
    /// Returns a human-readable description of the event for debug logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SymbolChanged(_) => "display symbol changed",
            AppEvent::ConfigChanged => "config changed",
            AppEvent::WindowMoved { .. } => "window moved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_equality() {
        assert_eq!(AppEvent::ConfigChanged, AppEvent::ConfigChanged);
        assert_ne!(
            AppEvent::SymbolChanged(DisplaySymbol::LatinLower),
            AppEvent::SymbolChanged(DisplaySymbol::LatinUpper)
        );
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            AppEvent::SymbolChanged(DisplaySymbol::ChineseActive),
            AppEvent::ConfigChanged,
            AppEvent::WindowMoved { x: 1.0, y: 2.0 },
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
