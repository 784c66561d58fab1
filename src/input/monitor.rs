//! The monitor state machine behind the published display symbol.
//!
//! Two independent triggers feed this core: distributed notifications from
//! the OS (handled by the platform driver calling `refresh`) and a 200 ms
//! poll (`poll`). Both converge on the same publish gate: a symbol is
//! returned for publishing only when it differs from the one currently
//! published, no matter how many triggers fired. Cached raw inputs are
//! always updated so a later poll never re-derives from stale comparisons.

use tracing::debug;

use super::classify::{classify, DisplaySymbol, InputSourceSnapshot};

/// Pure state of the input-source monitor.
///
/// The platform driver owns one of these and forwards whatever it returns
/// to the event bus. Keeping the gate here means the notification and poll
/// paths cannot race into duplicate publishes.
#[derive(Debug)]
pub struct MonitorCore {
    last_source_id: String,
    last_caps_lock: bool,
    current: DisplaySymbol,
}

impl Default for MonitorCore {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorCore {
    /// Start with nothing published yet; the first refresh always yields
    /// a symbol to publish.
    pub fn new() -> Self {
        Self {
            last_source_id: String::new(),
            last_caps_lock: false,
            current: DisplaySymbol::Unknown,
        }
    }

    /// The currently published symbol.
    pub fn current(&self) -> DisplaySymbol {
        self.current
    }

    /// Re-derive from a fresh snapshot (notification path, and the poll
    /// path once a raw change is detected).
    ///
    /// `None` as the snapshot means the OS query failed; the sentinel
    /// `Unknown` is published instead of any symbol. Returns the symbol to
    /// publish, or `None` when the derived symbol matches what is already
    /// published (the caches still get updated in that case).
    pub fn refresh(&mut self, snapshot: Option<&InputSourceSnapshot>) -> Option<DisplaySymbol> {
        let next = match snapshot {
            Some(snap) => {
                self.last_source_id.clear();
                self.last_source_id.push_str(&snap.source_id);
                self.last_caps_lock = snap.caps_lock;
                classify(snap)
            }
            None => DisplaySymbol::Unknown,
        };

        if next == self.current {
            return None;
        }
        debug!(from = ?self.current, to = ?next, "display symbol changed");
        self.current = next;
        Some(next)
    }

    /// Poll-driven check: skip the work entirely while the raw
    /// (source id, caps lock) pair is unchanged, otherwise fall through to
    /// `refresh`. A failed query during a poll keeps the previous state;
    /// the notification path owns the transition to `Unknown`.
    pub fn poll(&mut self, snapshot: Option<&InputSourceSnapshot>) -> Option<DisplaySymbol> {
        match snapshot {
            Some(snap)
                if snap.source_id == self.last_source_id
                    && snap.caps_lock == self.last_caps_lock =>
            {
                None
            }
            Some(snap) => self.refresh(Some(snap)),
            None => None,
        }
    }
}
