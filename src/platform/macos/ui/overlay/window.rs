//! The floating indicator window.
//!
//! A borderless, non-activating window pinned above pop-up-menu level so
//! the badge stays visible over normal application windows, all Spaces,
//! and full-screen apps. The user repositions it by dragging anywhere on
//! its background.

use objc2_foundation::{NSPoint, NSRect, NSSize};

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NO, YES};
use crate::platform::macos::ffi::indicator_window_level;

// NSWindowCollectionBehaviorCanJoinAllSpaces = 1 << 0
// NSWindowCollectionBehaviorStationary = 1 << 4
// NSWindowCollectionBehaviorFullScreenAuxiliary = 1 << 8
const COLLECTION_BEHAVIOR: u64 = 1 | 16 | 256;

/// Create the indicator window at the given frame.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn make_indicator_window(x: f64, y: f64, width: f64, height: f64) -> id {
    let frame = NSRect::new(NSPoint::new(x, y), NSSize::new(width, height));

    // NSBorderlessWindowMask = 0
    let style_mask: u64 = 0;
    // NSBackingStoreBuffered = 2
    let backing: u64 = 2;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style_mask,
        backing: backing,
        defer: NO
    ];

    let _: () = msg_send![window, setOpaque: NO];
    let clear_color: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear_color];
    let _: () = msg_send![window, setHasShadow: YES];

    let _: () = msg_send![window, setLevel: indicator_window_level()];
    let _: () = msg_send![window, setCollectionBehavior: COLLECTION_BEHAVIOR];

    // Dragging the badge is the only mouse interaction it supports.
    let _: () = msg_send![window, setMovableByWindowBackground: YES];
    let _: () = msg_send![window, setIgnoresMouseEvents: NO];

    window
}

/// Order the window front and re-assert level and collection behavior.
/// Space and full-screen transitions can demote an overlay; re-applying
/// on show keeps the policy intact.
///
/// # Safety
/// `window` must be a valid NSWindow created by `make_indicator_window`.
pub unsafe fn show_indicator_window(window: id) {
    let _: () = msg_send![window, orderFrontRegardless];
    let _: () = msg_send![window, setLevel: indicator_window_level()];
    let _: () = msg_send![window, setCollectionBehavior: COLLECTION_BEHAVIOR];
}
