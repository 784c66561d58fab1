//! macOS-specific entry point and application wiring.
//!
//! Builds the object graph explicitly: one event bus, one config store,
//! one monitor, one window + synchronizer, and a main-loop timer that
//! drains the bus through the dispatcher. Nothing here is a global; every
//! component receives what it needs at construction.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};
use block2::RcBlock;
use tracing::info;

use inputfloat::events::EventBus;
use inputfloat::model::{FloatConfig, ScreenFrame};
use inputfloat::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nsstring_id, NSApp, YES,
};
use inputfloat::platform::macos::ffi::main_screen_visible_frame;
use inputfloat::platform::macos::handlers::{dispatch_events, AppContext};
use inputfloat::platform::macos::input::InputMethodMonitor;
use inputfloat::platform::macos::storage::UserDefaultsPrefs;
use inputfloat::platform::macos::ui::{
    apply_config_to_view, make_indicator_window, register_and_create_view, set_view_symbol,
    show_indicator_window, WindowSynchronizer,
};

/// Fallback screen frame when no display can be queried during a reset.
const FALLBACK_SCREEN: ScreenFrame = ScreenFrame {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

/// Dispatch-timer period; events are applied well within a frame.
const DISPATCH_INTERVAL_SECS: f64 = 0.016;

/// Main entry point for macOS.
pub fn run(reset: bool) -> Result<()> {
    autoreleasepool(|| unsafe { run_app(reset) })
}

unsafe fn run_app(reset: bool) -> Result<()> {
    let app = NSApp();
    // NSApplicationActivationPolicyAccessory = 1: no Dock icon, no menu bar.
    let _: bool = msg_send![app, setActivationPolicy: 1i64];

    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];
    if count == 0 {
        bail!("no screens available");
    }

    let bus = EventBus::new();

    let config = FloatConfig::load(Box::new(UserDefaultsPrefs::new()), bus.publisher());
    let config = Rc::new(RefCell::new(config));
    if reset {
        let screen = main_screen_visible_frame().unwrap_or(FALLBACK_SCREEN);
        config.borrow_mut().reset_to_defaults(screen);
    }

    // Window + view from the loaded geometry.
    let (x, y, width, height) = config.borrow().frame();
    let window = make_indicator_window(x, y, width, height);
    // Retain so the autorelease pool cannot deallocate the window.
    let window: id = msg_send![window, retain];
    let view = register_and_create_view(window, width, height);
    let view: id = msg_send![view, retain];
    apply_config_to_view(view, &config.borrow());
    show_indicator_window(window);

    // Monitor publishes into the bus; seed the view with its first symbol.
    let monitor = InputMethodMonitor::start(bus.publisher());
    set_view_symbol(view, monitor.current());

    let sync = WindowSynchronizer::install(window, bus.publisher());
    let ctx = AppContext {
        view,
        config: Rc::clone(&config),
        sync,
    };

    // Main-loop timer drains the bus through the dispatcher.
    let dispatch_block = RcBlock::new(move |_timer: id| unsafe {
        dispatch_events(&bus, &ctx);
    });
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: DISPATCH_INTERVAL_SECS,
        repeats: YES,
        block: &*dispatch_block
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), mainRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];

    info!("indicator running");
    let _: () = msg_send![app, run];

    // run() only returns on termination; monitor/synchronizer teardown
    // happens through their Drop impls.
    drop(monitor);
    Ok(())
}
