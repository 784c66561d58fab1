//! Driver for the input-source monitor.
//!
//! Wires the pure `MonitorCore` state machine to the OS: four distributed
//! notifications trigger a full refresh, and a 200 ms poll timer catches
//! the transitions that emit no notification (caps-lock ASCII toggles
//! within the same source). Both paths run on the main thread and publish
//! through the event bus only when the core's gate passes.

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use block2::RcBlock;
use tracing::{debug, info};

use crate::events::{AppEvent, EventPublisher};
use crate::input::{DisplaySymbol, InputSourceSnapshot, MonitorCore};
use crate::model::constants::POLL_INTERVAL_SECS;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, YES};
use crate::platform::macos::ffi::{
    caps_lock_active, cfstring_to_string, kTISPropertyInputSourceID, kTISPropertyInputSourceType,
    kTISPropertyLocalizedName, kTISTypeKeyboardLayout, CFRelease, CFStringRef,
    TISCopyCurrentKeyboardInputSource, TISGetInputSourceProperty, INPUT_SOURCE_NOTIFICATIONS,
};

/// Build a snapshot of the active input source, or `None` when the OS
/// cannot supply one. Missing individual properties degrade to empty
/// strings / conservative defaults rather than failing the snapshot.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn query_snapshot() -> Option<InputSourceSnapshot> {
    let source = TISCopyCurrentKeyboardInputSource();
    if source.is_null() {
        return None;
    }

    let source_id =
        cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyInputSourceID) as CFStringRef)
            .unwrap_or_default();
    let localized_name =
        cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyLocalizedName) as CFStringRef)
            .unwrap_or_default();

    let source_type =
        cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyInputSourceType) as CFStringRef);
    let layout_type = cfstring_to_string(kTISTypeKeyboardLayout);
    let is_keyboard_layout = match (&source_type, &layout_type) {
        (Some(t), Some(l)) => t == l,
        _ => false,
    };

    CFRelease(source as *const c_void);

    Some(InputSourceSnapshot {
        source_id,
        localized_name,
        is_keyboard_layout,
        caps_lock: caps_lock_active(),
    })
}

/// Owns the notification subscriptions and the poll timer that keep the
/// published display symbol fresh.
pub struct InputMethodMonitor {
    core: Rc<RefCell<MonitorCore>>,
    observers: Vec<id>,
    poll_timer: id,
}

impl InputMethodMonitor {
    /// Subscribe to the input-source notifications, start the poll timer,
    /// and publish the initial symbol.
    ///
    /// # Safety
    /// Must be called from the main thread with a valid autorelease pool.
    pub unsafe fn start(publisher: EventPublisher) -> Self {
        let core = Rc::new(RefCell::new(MonitorCore::new()));

        // Initial derive so the badge never starts blank.
        let snapshot = query_snapshot();
        if let Some(symbol) = core.borrow_mut().refresh(snapshot.as_ref()) {
            publisher.publish(AppEvent::SymbolChanged(symbol));
        }

        let center: id = msg_send![
            get_class("NSDistributedNotificationCenter"),
            defaultCenter
        ];
        let main_queue: id = msg_send![get_class("NSOperationQueue"), mainQueue];

        let mut observers = Vec::with_capacity(INPUT_SOURCE_NOTIFICATIONS.len());
        for name in INPUT_SOURCE_NOTIFICATIONS {
            let block_core = Rc::clone(&core);
            let block_publisher = publisher.clone();
            let block = RcBlock::new(move |_note: id| {
                // Delivered on the main queue; safe to touch the core.
                unsafe {
                    let snapshot = query_snapshot();
                    if let Some(symbol) = block_core.borrow_mut().refresh(snapshot.as_ref()) {
                        block_publisher.publish(AppEvent::SymbolChanged(symbol));
                    }
                }
            });

            let ns_name = nsstring_id(name);
            let token: id = msg_send![
                center,
                addObserverForName: ns_name,
                object: nil,
                queue: main_queue,
                usingBlock: &*block
            ];
            let token: id = msg_send![token, retain];
            debug!(name, "subscribed to input-source notification");
            observers.push(token);
        }

        // Poll timer: catches caps-lock toggles and anything the
        // notifications miss. Added to common modes so it keeps firing
        // while menus are open.
        let poll_core = Rc::clone(&core);
        let poll_publisher = publisher;
        let poll_block = RcBlock::new(move |_timer: id| unsafe {
            let snapshot = query_snapshot();
            if let Some(symbol) = poll_core.borrow_mut().poll(snapshot.as_ref()) {
                poll_publisher.publish(AppEvent::SymbolChanged(symbol));
            }
        });
        let timer: id = msg_send![
            get_class("NSTimer"),
            timerWithTimeInterval: POLL_INTERVAL_SECS,
            repeats: YES,
            block: &*poll_block
        ];
        let run_loop: id = msg_send![get_class("NSRunLoop"), mainRunLoop];
        let common_modes = nsstring_id("kCFRunLoopCommonModes");
        let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
        let timer: id = msg_send![timer, retain];

        info!("input-source monitor started");
        Self {
            core,
            observers,
            poll_timer: timer,
        }
    }

    /// The currently published symbol.
    pub fn current(&self) -> DisplaySymbol {
        self.core.borrow().current()
    }

    /// Unsubscribe from all notifications and stop the poll timer.
    /// Idempotent; no publishes occur after this returns.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn stop(&mut self) {
        if !self.observers.is_empty() {
            let center: id = msg_send![
                get_class("NSDistributedNotificationCenter"),
                defaultCenter
            ];
            for token in self.observers.drain(..) {
                let _: () = msg_send![center, removeObserver: token];
                let _: () = msg_send![token, release];
            }
        }

        if self.poll_timer != nil {
            let _: () = msg_send![self.poll_timer, invalidate];
            let _: () = msg_send![self.poll_timer, release];
            self.poll_timer = nil;
        }
        info!("input-source monitor stopped");
    }
}

impl Drop for InputMethodMonitor {
    fn drop(&mut self) {
        // stop() is idempotent, so an explicit stop followed by drop is fine.
        unsafe { self.stop() }
    }
}
