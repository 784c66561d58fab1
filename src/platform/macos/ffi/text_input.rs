//! FFI bindings for Carbon Text Input Source Services (TIS).
//!
//! This module provides the low-level declarations needed to query the
//! active keyboard input source and its properties, plus the
//! CoreFoundation string helpers to bring the results into Rust.

use std::ffi::c_void;

// === Types ===

pub type TISInputSourceRef = *mut c_void;
pub type CFStringRef = *const c_void;
pub type CFIndex = isize;
pub type CFStringEncoding = u32;

// === Constants ===

pub const K_CF_STRING_ENCODING_UTF8: CFStringEncoding = 0x0800_0100;

/// Distributed notification names that signal an input-source change.
///
/// No single name is guaranteed to fire on every macOS version; the
/// selected/enabled pair and their two legacy aliases together cover the
/// subsystems observed in the wild, so all four are subscribed.
pub const INPUT_SOURCE_NOTIFICATIONS: [&str; 4] = [
    "com.apple.Carbon.TISNotifySelectedKeyboardInputSourceChanged",
    "com.apple.Carbon.TISNotifyEnabledKeyboardInputSourcesChanged",
    "AppleSelectedInputSourcesChangedNotification",
    "AppleEnabledInputSourcesChangedNotification",
];

// === FFI Declarations ===

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    /// Copy-rule: caller releases the returned source.
    pub fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;

    /// Get-rule: the returned property value is not owned by the caller.
    pub fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> *const c_void;

    pub static kTISPropertyInputSourceID: CFStringRef;
    pub static kTISPropertyLocalizedName: CFStringRef;
    pub static kTISPropertyInputSourceType: CFStringRef;
    pub static kTISTypeKeyboardLayout: CFStringRef;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(cf: *const c_void);

    pub fn CFStringGetLength(string: CFStringRef) -> CFIndex;

    pub fn CFStringGetCString(
        string: CFStringRef,
        buffer: *mut std::ffi::c_char,
        buffer_size: CFIndex,
        encoding: CFStringEncoding,
    ) -> bool;
}

// === Helpers ===

/// Copy a CFString into a Rust String.
///
/// Returns `None` for a null reference or a conversion failure, so a
/// missing property degrades to the caller's default instead of failing
/// the classification.
///
/// # Safety
/// `s` must be null or a valid CFString reference.
pub unsafe fn cfstring_to_string(s: CFStringRef) -> Option<String> {
    if s.is_null() {
        return None;
    }
    // UTF-8 worst case: 4 bytes per UTF-16 unit, plus the NUL.
    let len = CFStringGetLength(s);
    let cap = (len as usize) * 4 + 1;
    let mut buf = vec![0u8; cap];
    if !CFStringGetCString(
        s,
        buf.as_mut_ptr() as *mut std::ffi::c_char,
        cap as CFIndex,
        K_CF_STRING_ENCODING_UTF8,
    ) {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(end);
    String::from_utf8(buf).ok()
}
