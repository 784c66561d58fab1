#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Pure helpers used by the app. Keep this file free of macOS FFI so tests
//! can run as normal integration tests.

pub mod events;
pub mod input;
pub mod model;
pub mod platform;
pub mod sync;

// Re-export model types for convenience
pub use model::{FloatConfig, Rgb};

// Re-export the classifier/monitor types for convenience
pub use input::{DisplaySymbol, InputSourceSnapshot, MonitorCore};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert RGB floats [0..1] to #RRGGBB.
pub fn color_to_hex(r: f64, g: f64, b: f64) -> String {
    let ri = (clamp(r, 0.0, 1.0) * 255.0).round() as u8;
    let gi = (clamp(g, 0.0, 1.0) * 255.0).round() as u8;
    let bi = (clamp(b, 0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", ri, gi, bi)
}

/// Parse `#RRGGBB` (or `#RRGGBBAA`, alpha ignored) into normalised floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    // ASCII-only before slicing: multi-byte input must reject, not panic.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let (r, g, b) = match hex.len() {
        6 | 8 => {
            let rv = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gv = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bv = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (rv, gv, bv)
        }
        _ => return None,
    };
    Some((
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn hex_round_trip() {
        let hex = color_to_hex(1.0, 1.0, 1.0);
        assert_eq!(hex, "#FFFFFF");
        let (r, g, b) = parse_hex_color(&hex).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hex_parse_ignores_alpha_and_whitespace() {
        let (r, g, b) = parse_hex_color(" #00FF00AA ").unwrap();
        assert!(r.abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn hex_parse_rejects_garbage() {
        assert!(parse_hex_color("#12").is_none());
        assert!(parse_hex_color("not a color").is_none());
    }

    #[test]
    fn hex_parse_rejects_multibyte_input() {
        // "中中" is 6 bytes, so a byte-length check alone would let it
        // through to the slicing and panic on a char boundary.
        assert!(parse_hex_color("中中").is_none());
        assert!(parse_hex_color("#中中").is_none());
        assert!(parse_hex_color("FF00中").is_none());
    }
}
