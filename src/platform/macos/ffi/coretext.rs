//! FFI bindings for CoreText (glyph rendering).
//!
//! This module provides the CoreText API declarations needed for rendering
//! the indicator glyph (中/英/a/A) as a vector path.

use objc2::encode::{Encoding, RefEncode};

// === Types ===

pub type CTFontRef = *const std::ffi::c_void;

/// Opaque CGPath type for correct objc2 encoding.
/// objc2 expects `^{CGPath=}` not `^v` (void pointer).
#[repr(C)]
pub struct CGPath {
    _private: [u8; 0],
}

// SAFETY: CGPath is an opaque Core Graphics type
unsafe impl RefEncode for CGPath {
    const ENCODING_REF: Encoding = Encoding::Pointer(&Encoding::Struct("CGPath", &[]));
}

pub type CGPathRef = *const CGPath;

// === FFI Declarations ===

#[link(name = "CoreText", kind = "framework")]
extern "C" {
    pub fn CTFontCreateWithName(
        name: *const std::ffi::c_void,
        size: f64,
        matrix: *const std::ffi::c_void,
    ) -> CTFontRef;

    pub fn CTFontGetGlyphsForCharacters(
        font: CTFontRef,
        chars: *const u16,
        glyphs: *mut u16,
        count: isize,
    ) -> bool;

    pub fn CTFontCreatePathForGlyph(
        font: CTFontRef,
        glyph: u16,
        transform: *const std::ffi::c_void,
    ) -> CGPathRef;
}

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGPathRelease(path: CGPathRef);
}
