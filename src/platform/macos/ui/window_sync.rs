//! Window synchronizer: config → frame, and moves → debounced save.
//!
//! Two independent flows with different policies:
//! - Config → window: every `ConfigChanged` recomputes the frame from the
//!   config and applies it. Applying an identical frame is idempotent, so
//!   no coalescing is needed.
//! - Window → config: every `NSWindowDidMoveNotification` publishes a
//!   `WindowMoved` event; the dispatcher calls `schedule_save`, which
//!   supersedes the pending save and arms a fresh 500 ms one-shot timer.
//!   Only the last settled position of a drag burst reaches the store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use block2::RcBlock;
use objc2_foundation::{NSPoint, NSRect, NSSize};
use tracing::debug;

use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::SAVE_DEBOUNCE_SECS;
use crate::model::FloatConfig;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, NO, YES};
use crate::sync::PositionDebouncer;

/// Keeps the indicator window and the config store consistent.
pub struct WindowSynchronizer {
    window: id,
    debouncer: Rc<RefCell<PositionDebouncer>>,
    save_timer: Cell<id>,
    move_observer: id,
}

impl WindowSynchronizer {
    /// Observe move completions on `window`, publishing them as events.
    ///
    /// # Safety
    /// Must be called from the main thread; `window` must be a valid
    /// NSWindow that outlives the synchronizer.
    pub unsafe fn install(window: id, publisher: EventPublisher) -> Self {
        let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
        let main_queue: id = msg_send![get_class("NSOperationQueue"), mainQueue];

        let block = RcBlock::new(move |note: id| unsafe {
            let moved: id = msg_send![note, object];
            let frame: NSRect = msg_send![moved, frame];
            publisher.publish(AppEvent::WindowMoved {
                x: frame.origin.x,
                y: frame.origin.y,
            });
        });

        let name = nsstring_id("NSWindowDidMoveNotification");
        let token: id = msg_send![
            center,
            addObserverForName: name,
            object: window,
            queue: main_queue,
            usingBlock: &*block
        ];
        let token: id = msg_send![token, retain];

        Self {
            window,
            debouncer: Rc::new(RefCell::new(PositionDebouncer::new())),
            save_timer: Cell::new(nil),
            move_observer: token,
        }
    }

    /// Recompute the frame from the config and apply it.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn apply_frame(&self, config: &FloatConfig) {
        let (x, y, width, height) = config.frame();
        let frame = NSRect::new(NSPoint::new(x, y), NSSize::new(width, height));
        let _: () = msg_send![self.window, setFrame: frame, display: YES];
    }

    /// Supersede any pending position save and arm a fresh debounce timer
    /// for the given origin.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn schedule_save(&self, config: Rc<RefCell<FloatConfig>>, x: f64, y: f64) {
        let prev = self.save_timer.replace(nil);
        if prev != nil {
            let _: () = msg_send![prev, invalidate];
            let _: () = msg_send![prev, release];
        }

        let token = self.debouncer.borrow_mut().note_move(x, y);
        let debouncer = Rc::clone(&self.debouncer);
        let block = RcBlock::new(move |_timer: id| {
            // The generation check makes a stale timer that slipped past
            // invalidation a no-op.
            if let Some((x, y)) = debouncer.borrow_mut().try_commit(token) {
                debug!(x, y, "debounce settled, persisting position");
                config.borrow_mut().set_position(x, y);
            }
        });

        let timer: id = msg_send![
            get_class("NSTimer"),
            timerWithTimeInterval: SAVE_DEBOUNCE_SECS,
            repeats: NO,
            block: &*block
        ];
        let run_loop: id = msg_send![get_class("NSRunLoop"), mainRunLoop];
        let common_modes = nsstring_id("kCFRunLoopCommonModes");
        let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
        // This runs once per move event; balance the +1 mode string or
        // every drag tick leaks one.
        let _: () = msg_send![common_modes, release];
        let timer: id = msg_send![timer, retain];
        self.save_timer.set(timer);
    }

    /// Remove the move observer and drop any pending save. Idempotent.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn teardown(&mut self) {
        if self.move_observer != nil {
            let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
            let _: () = msg_send![center, removeObserver: self.move_observer];
            let _: () = msg_send![self.move_observer, release];
            self.move_observer = nil;
        }

        let timer = self.save_timer.replace(nil);
        if timer != nil {
            let _: () = msg_send![timer, invalidate];
            let _: () = msg_send![timer, release];
        }
        self.debouncer.borrow_mut().cancel();
    }
}

impl Drop for WindowSynchronizer {
    fn drop(&mut self) {
        unsafe { self.teardown() }
    }
}
