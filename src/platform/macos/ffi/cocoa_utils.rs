//! Cocoa utility functions.
//!
//! Helpers for window levels, the caps-lock modifier state, and screen
//! geometry queries.

use objc2::msg_send;

use super::bridge::{get_class, id, nil};
use crate::model::ScreenFrame;

/// Window level slightly above context menus and Dock.
pub fn nspop_up_menu_window_level() -> i64 {
    201
}

/// Window level for the indicator (above popup menus), so the badge stays
/// visible over normal application windows and full-screen apps.
pub fn indicator_window_level() -> i64 {
    nspop_up_menu_window_level() + 1
}

/// NSEventModifierFlagCapsLock.
const CAPS_LOCK_FLAG: u64 = 1 << 16;

/// Physical caps-lock state from the current modifier flags.
pub fn caps_lock_active() -> bool {
    let flags: u64 = unsafe { msg_send![get_class("NSEvent"), modifierFlags] };
    flags & CAPS_LOCK_FLAG != 0
}

/// Visible frame (excluding menu bar and Dock) of the main screen, in
/// Cocoa coordinates. `None` when no screen is attached.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn main_screen_visible_frame() -> Option<ScreenFrame> {
    let screen: id = msg_send![get_class("NSScreen"), mainScreen];
    if screen == nil {
        return None;
    }
    let frame: objc2_foundation::NSRect = msg_send![screen, visibleFrame];
    Some(ScreenFrame {
        x: frame.origin.x,
        y: frame.origin.y,
        width: frame.size.width,
        height: frame.size.height,
    })
}
