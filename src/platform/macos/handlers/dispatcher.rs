//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes the
//! corresponding actions. It's called from the main loop timer and
//! processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → window / view / config
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::events::{AppEvent, EventBus};
use crate::model::FloatConfig;
use crate::platform::macos::ffi::bridge::id;
use crate::platform::macos::ui::{apply_config_to_view, set_view_symbol, WindowSynchronizer};

/// Everything the dispatcher touches when applying events.
pub struct AppContext {
    /// The IndicatorView rendering the badge.
    pub view: id,
    /// The shared config store.
    pub config: Rc<RefCell<FloatConfig>>,
    /// Window frame / debounced-save coordinator.
    pub sync: WindowSynchronizer,
}

/// Dispatch all pending events from the bus.
///
/// Called from the main loop timer. Events were published on the main
/// thread, so ordering within a drain matches publish order and
/// last-write-wins for redundant symbol updates.
///
/// # Safety
/// Must be called from the main thread; the context's view pointer must
/// be valid.
pub unsafe fn dispatch_events(bus: &EventBus, ctx: &AppContext) {
    for event in bus.drain() {
        trace!(event = event.description(), "dispatch");
        match event {
            AppEvent::SymbolChanged(symbol) => {
                set_view_symbol(ctx.view, symbol);
            }

            AppEvent::ConfigChanged => {
                let config = ctx.config.borrow();
                ctx.sync.apply_frame(&config);
                apply_config_to_view(ctx.view, &config);
            }

            AppEvent::WindowMoved { x, y } => {
                ctx.sync.schedule_save(Rc::clone(&ctx.config), x, y);
            }
        }
    }
}
