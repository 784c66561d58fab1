//! IndicatorView class for the badge.
//!
//! This module registers the NSView subclass that renders the badge and
//! keeps its appearance in ivars. The dispatcher pushes config and symbol
//! updates here and marks the view dirty; drawing itself happens in
//! `drawing.rs`.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;
use objc2_foundation::{NSPoint, NSRect, NSSize};

use crate::input::DisplaySymbol;
use crate::model::FloatConfig;
use crate::platform::macos::ffi::bridge::{id, msg_send, ObjectExt, YES};

use super::drawing::{draw_badge, BadgeParams};

/// Ivar encoding of the display symbol.
fn symbol_code(symbol: DisplaySymbol) -> i32 {
    match symbol {
        DisplaySymbol::ChineseActive => 0,
        DisplaySymbol::ChineseLatin => 1,
        DisplaySymbol::LatinLower => 2,
        DisplaySymbol::LatinUpper => 3,
        DisplaySymbol::Unknown => 4,
    }
}

fn code_symbol(code: i32) -> DisplaySymbol {
    match code {
        0 => DisplaySymbol::ChineseActive,
        1 => DisplaySymbol::ChineseLatin,
        2 => DisplaySymbol::LatinLower,
        3 => DisplaySymbol::LatinUpper,
        _ => DisplaySymbol::Unknown,
    }
}

/// Register (once) and instantiate the indicator view as the window's
/// content view.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool;
/// `window` must be a valid NSWindow.
pub unsafe fn register_and_create_view(window: id, width: f64, height: f64) -> id {
    let class_name = c"IndicatorView";
    let view_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSView").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        register_ivars(&mut builder);

        builder.add_method(
            sel!(drawRect:),
            draw_rect as unsafe extern "C-unwind" fn(_, _, _),
        );

        builder.register()
    };

    let view: id = msg_send![view_class, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];

    initialize_view_ivars(view);

    let _: () = msg_send![window, setContentView: view];
    view
}

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    builder.add_ivar::<i32>(c"_symbolCode");
    builder.add_ivar::<f64>(c"_fontSize");
    builder.add_ivar::<f64>(c"_cornerRadius");
    builder.add_ivar::<f64>(c"_textR");
    builder.add_ivar::<f64>(c"_textG");
    builder.add_ivar::<f64>(c"_textB");
    builder.add_ivar::<f64>(c"_backR");
    builder.add_ivar::<f64>(c"_backG");
    builder.add_ivar::<f64>(c"_backB");
    builder.add_ivar::<f64>(c"_opacity");
}

unsafe fn initialize_view_ivars(view: id) {
    // Overridden by apply_config_to_view before the first draw.
    (*view).store_ivar::<i32>("_symbolCode", symbol_code(DisplaySymbol::Unknown));
    (*view).store_ivar::<f64>("_fontSize", 26.0);
    (*view).store_ivar::<f64>("_cornerRadius", 4.0);
    (*view).store_ivar::<f64>("_textR", 1.0);
    (*view).store_ivar::<f64>("_textG", 1.0);
    (*view).store_ivar::<f64>("_textB", 1.0);
    (*view).store_ivar::<f64>("_backR", 0.0);
    (*view).store_ivar::<f64>("_backG", 0.0);
    (*view).store_ivar::<f64>("_backB", 0.0);
    (*view).store_ivar::<f64>("_opacity", 0.9);
}

/// Push appearance fields from the config into the view and redraw.
///
/// # Safety
/// `view` must be a valid IndicatorView; main thread only.
pub unsafe fn apply_config_to_view(view: id, config: &FloatConfig) {
    (*view).store_ivar::<f64>("_fontSize", config.font_size());
    (*view).store_ivar::<f64>("_cornerRadius", config.corner_radius());
    let text = config.text_color();
    (*view).store_ivar::<f64>("_textR", text.r);
    (*view).store_ivar::<f64>("_textG", text.g);
    (*view).store_ivar::<f64>("_textB", text.b);
    let back = config.background_color();
    (*view).store_ivar::<f64>("_backR", back.r);
    (*view).store_ivar::<f64>("_backG", back.g);
    (*view).store_ivar::<f64>("_backB", back.b);
    (*view).store_ivar::<f64>("_opacity", config.opacity());
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

/// Push a new display symbol into the view and redraw.
///
/// # Safety
/// `view` must be a valid IndicatorView; main thread only.
pub unsafe fn set_view_symbol(view: id, symbol: DisplaySymbol) {
    (*view).store_ivar::<i32>("_symbolCode", symbol_code(symbol));
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    unsafe {
        let bounds: NSRect = msg_send![this, bounds];

        let params = BadgeParams {
            bounds,
            corner_radius: *this.load_ivar::<f64>("_cornerRadius"),
            font_size: *this.load_ivar::<f64>("_fontSize"),
            text: (
                *this.load_ivar::<f64>("_textR"),
                *this.load_ivar::<f64>("_textG"),
                *this.load_ivar::<f64>("_textB"),
            ),
            back: (
                *this.load_ivar::<f64>("_backR"),
                *this.load_ivar::<f64>("_backG"),
                *this.load_ivar::<f64>("_backB"),
            ),
            opacity: *this.load_ivar::<f64>("_opacity"),
        };

        let symbol = code_symbol(*this.load_ivar::<i32>("_symbolCode"));
        draw_badge(&params, symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_codes_round_trip() {
        for symbol in [
            DisplaySymbol::ChineseActive,
            DisplaySymbol::ChineseLatin,
            DisplaySymbol::LatinLower,
            DisplaySymbol::LatinUpper,
            DisplaySymbol::Unknown,
        ] {
            assert_eq!(code_symbol(symbol_code(symbol)), symbol);
        }
    }
}
