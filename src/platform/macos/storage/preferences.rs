//! Persistence of the config store to NSUserDefaults.
//!
//! `UserDefaultsPrefs` is the macOS `PrefsStore` backend. NSUserDefaults
//! writes are fire-and-forget, matching the contract that persistence
//! failures never surface to the indicator.

use crate::model::PrefsStore;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, nsstring_to_string,
};

/// Reads a double from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_get_double(key: &str) -> Option<f64> {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        None
    } else {
        Some(msg_send![ud, doubleForKey: k])
    }
}

/// Saves a double to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_set_double(key: &str, val: f64) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setDouble: val, forKey: k];
}

/// Reads a bool from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_get_bool(key: &str) -> Option<bool> {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        None
    } else {
        Some(msg_send![ud, boolForKey: k])
    }
}

/// Saves a bool to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setBool: val, forKey: k];
}

/// Reads a string from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, stringForKey: k];
    if obj == nil {
        None
    } else {
        Some(nsstring_to_string(obj))
    }
}

/// Saves a string to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn prefs_set_string(key: &str, val: &str) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let v = nsstring_id(val);
    let _: () = msg_send![ud, setObject: v, forKey: k];
}

/// NSUserDefaults-backed preferences store.
///
/// All methods must run on the main thread; the config store is only ever
/// touched from there.
#[derive(Debug, Default)]
pub struct UserDefaultsPrefs;

impl UserDefaultsPrefs {
    pub fn new() -> Self {
        Self
    }
}

impl PrefsStore for UserDefaultsPrefs {
    fn get_f64(&self, key: &str) -> Option<f64> {
        unsafe { prefs_get_double(key) }
    }

    fn set_f64(&mut self, key: &str, val: f64) {
        unsafe { prefs_set_double(key, val) }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        unsafe { prefs_get_bool(key) }
    }

    fn set_bool(&mut self, key: &str, val: bool) {
        unsafe { prefs_set_bool(key, val) }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        unsafe { prefs_get_string(key) }
    }

    fn set_string(&mut self, key: &str, val: &str) {
        unsafe { prefs_set_string(key, val) }
    }
}
