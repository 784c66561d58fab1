//! Drawing functions for the indicator view.
//!
//! The badge is two rounded rectangles (background color behind a
//! text-color tile) with the symbol glyph cut in the background color on
//! top. The glyph is rendered from a CoreText vector path so it scales
//! cleanly with the font size.

use crate::input::DisplaySymbol;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect, NSSize};
use crate::platform::macos::ffi::{
    CFRelease, CGPathRef, CGPathRelease, CTFontCreatePathForGlyph, CTFontCreateWithName,
    CTFontGetGlyphsForCharacters, CTFontRef,
};

/// Inset of the text-color tile inside the badge, in pixels.
const INNER_PADDING: f64 = 3.3;

/// Drawing parameters extracted from view ivars.
#[derive(Clone, Copy)]
pub struct BadgeParams {
    /// View bounds; the badge fills them.
    pub bounds: NSRect,
    /// Badge corner radius (derived from the font size by the config).
    pub corner_radius: f64,
    /// Glyph font size in points.
    pub font_size: f64,
    /// Text color (r, g, b), each [0.0, 1.0].
    pub text: (f64, f64, f64),
    /// Background color (r, g, b), each [0.0, 1.0].
    pub back: (f64, f64, f64),
    /// Overall badge opacity [0.0, 1.0].
    pub opacity: f64,
}

/// Fill a rounded rect with the given color at the badge opacity.
unsafe fn fill_rounded_rect(rect: NSRect, radius: f64, color: (f64, f64, f64), opacity: f64) {
    let ns_color = get_class("NSColor");
    let ns_bezier = get_class("NSBezierPath");

    let path: id = msg_send![
        ns_bezier,
        bezierPathWithRoundedRect: rect,
        xRadius: radius,
        yRadius: radius
    ];
    let fill: id = msg_send![
        ns_color,
        colorWithCalibratedRed: color.0,
        green: color.1,
        blue: color.2,
        alpha: opacity
    ];
    let _: () = msg_send![fill, set];
    let _: () = msg_send![path, fill];
}

/// Draw the full badge: background rect, text-color tile, glyph.
///
/// # Safety
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_badge(params: &BadgeParams, symbol: DisplaySymbol) {
    fill_rounded_rect(params.bounds, params.corner_radius, params.back, params.opacity);

    let inner = NSRect::new(
        NSPoint::new(
            params.bounds.origin.x + INNER_PADDING,
            params.bounds.origin.y + INNER_PADDING,
        ),
        NSSize::new(
            params.bounds.size.width - INNER_PADDING * 2.0,
            params.bounds.size.height - INNER_PADDING * 2.0,
        ),
    );
    let inner_radius = (params.corner_radius - 1.0).max(2.0);
    fill_rounded_rect(inner, inner_radius, params.text, params.opacity);

    draw_glyph(params, symbol);
}

/// Draw the symbol glyph centered in the badge, in the background color.
///
/// # Safety
/// Must be called from the main thread within a valid drawing context.
unsafe fn draw_glyph(params: &BadgeParams, symbol: DisplaySymbol) {
    let ns_color = get_class("NSColor");
    let ns_bezier = get_class("NSBezierPath");
    let ns_affine = get_class("NSAffineTransform");
    let font_class = get_class("NSFont");

    let font: id = msg_send![font_class, systemFontOfSize: params.font_size];
    let font_name: id = msg_send![font, fontName];

    let ct_font: CTFontRef =
        CTFontCreateWithName(font_name as *const _, params.font_size, std::ptr::null());
    if ct_font.is_null() {
        return;
    }

    // Every glyph in the display alphabet is a single BMP character.
    let ch_u16: u16 = match symbol.glyph().encode_utf16().next() {
        Some(u) => u,
        None => {
            CFRelease(ct_font as *const _);
            return;
        }
    };
    let mut glyph: u16 = 0;

    let mapped =
        CTFontGetGlyphsForCharacters(ct_font, &ch_u16 as *const u16, &mut glyph as *mut u16, 1);

    if !mapped || glyph == 0 {
        CFRelease(ct_font as *const _);
        return;
    }

    let cg_path: CGPathRef = CTFontCreatePathForGlyph(ct_font, glyph, std::ptr::null());
    if cg_path.is_null() {
        CFRelease(ct_font as *const _);
        return;
    }

    let path: id = msg_send![ns_bezier, bezierPathWithCGPath: cg_path];

    // Center the glyph in the badge.
    let pbounds: NSRect = msg_send![path, bounds];
    let mid_x = pbounds.origin.x + pbounds.size.width / 2.0;
    let mid_y = pbounds.origin.y + pbounds.size.height / 2.0;
    let center = NSPoint::new(
        params.bounds.origin.x + params.bounds.size.width / 2.0,
        params.bounds.origin.y + params.bounds.size.height / 2.0,
    );

    let transform: id = msg_send![ns_affine, transform];
    let dx = center.x - mid_x;
    let dy = center.y - mid_y;
    let _: () = msg_send![transform, translateXBy: dx, yBy: dy];
    let _: () = msg_send![path, transformUsingAffineTransform: transform];

    let fill: id = msg_send![
        ns_color,
        colorWithCalibratedRed: params.back.0,
        green: params.back.1,
        blue: params.back.2,
        alpha: params.opacity
    ];
    let _: () = msg_send![fill, set];
    let _: () = msg_send![path, fill];

    CGPathRelease(cg_path);
    CFRelease(ct_font as *const _);
}
