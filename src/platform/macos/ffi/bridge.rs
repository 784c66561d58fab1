//! Thin bridge over the objc2 ecosystem.
//!
//! This module centralises the type aliases, re-exports and small helpers
//! the rest of the platform layer needs to talk to Objective-C, so call
//! sites can `use crate::platform::macos::ffi::bridge::*` and work with the
//! classic `id`/`nil` vocabulary.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{class, msg_send, sel, ClassType};

// ============================================================================
// Type aliases
// ============================================================================

/// Objective-C object pointer.
///
/// Prefer typed pointers like `&NSView` or `Retained<NSString>` when the
/// type is known; use `id` only for truly dynamic objects.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES (u8-backed, not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO.
pub const NO: Bool = Bool::NO;

// ============================================================================
// Foundation / AppKit re-exports
// ============================================================================

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2_app_kit::{NSApplication, NSEvent, NSScreen};

// ============================================================================
// Block support
// ============================================================================

pub use block2::{Block, RcBlock, StackBlock};

// ============================================================================
// Memory management
// ============================================================================

pub use objc2::rc::Retained;

// ============================================================================
// Helper functions
// ============================================================================

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and return it as a raw id pointer.
///
/// The returned pointer is retained - caller must manage memory.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Copy an NSString into a Rust String; empty string for nil.
///
/// # Safety
/// `ns` must be nil or a valid NSString pointer.
pub unsafe fn nsstring_to_string(ns: id) -> String {
    if ns == nil {
        return String::new();
    }
    let utf8: *const std::ffi::c_char = msg_send![ns, UTF8String];
    if utf8.is_null() {
        return String::new();
    }
    std::ffi::CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Get a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

// ============================================================================
// Object trait extensions for ivar access
// ============================================================================

use objc2::encode::Encode;

/// Extension trait for accessing instance variables on AnyObject.
///
/// Uses `Ivar::load`/`Ivar::load_mut` internally (the non-deprecated API).
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Load a mutable reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load_mut::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

// ============================================================================
// Autorelease pool
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
