//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`
//!
//! This is pure Rust with no external dependencies beyond std. The bus is
//! constructed once at startup and its publishers are handed to each
//! producer explicitly; there is no global instance.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Single-consumer event bus for application-wide event distribution.
///
/// Multiple publishers can send events concurrently; the main thread
/// receives and processes them in batches.
///
/// # Example
///
/// ```
/// use inputfloat::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ConfigChanged);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and handed to producers.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // All senders dropped means the app is tearing down.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    ///
    /// This is the preferred method for processing events in the main loop:
    /// it collects everything published since the last drain at once.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
///
/// Each module that needs to emit events holds its own publisher. Send
/// errors are ignored: a dropped receiver means the app is shutting down.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
