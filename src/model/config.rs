//! The config store: persisted appearance and window geometry.
//!
//! `FloatConfig` is the single source of truth for everything the user can
//! tune. It is constructed once at startup and injected into the components
//! that need it; there is no global singleton. Every mutator persists the
//! affected keys through the injected `PrefsStore`, then publishes exactly
//! one `AppEvent::ConfigChanged` so observers (the window synchronizer and
//! the indicator view) can react.

use tracing::debug;

use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;
use crate::model::prefs::PrefsStore;
use crate::{clamp, color_to_hex, parse_hex_color};

/// An opaque RGB color with components in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Format as #RRGGBB for persistence.
    pub fn to_hex(self) -> String {
        color_to_hex(self.r, self.g, self.b)
    }

    /// Parse from #RRGGBB; `None` on malformed input.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let (r, g, b) = parse_hex_color(s)?;
        Some(Rgb { r, g, b })
    }
}

/// The visible frame of the screen the indicator lives on, in Cocoa
/// coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenFrame {
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }
}

/// Persisted indicator configuration.
///
/// Invariant: `window_width == window_height == font_size + 2 * WINDOW_PADDING`
/// at all times. The window size is derived from the font size both when the
/// font size is set and when the config is loaded; it is never assigned
/// independently.
pub struct FloatConfig {
    prefs: Box<dyn PrefsStore>,
    notify: EventPublisher,

    window_x: f64,
    window_y: f64,
    window_width: f64,
    window_height: f64,
    font_size: f64,
    text_color: Rgb,
    background_color: Rgb,
    opacity: f64,
    auto_start: bool,
}

/// Substitute the default for absent or zero-valued persisted floats.
/// NSUserDefaults reports 0.0 for keys that were never written, so a stored
/// zero is indistinguishable from "not set" and both fall back.
fn loaded_or_default(v: Option<f64>, default: f64) -> f64 {
    match v {
        Some(x) if x != 0.0 => x,
        _ => default,
    }
}

impl FloatConfig {
    /// Load the config from a backend, substituting defaults for anything
    /// absent. Window width/height are re-derived from the font size rather
    /// than read back, which keeps the geometry invariant even if the
    /// persisted values were tampered with.
    pub fn load(prefs: Box<dyn PrefsStore>, notify: EventPublisher) -> Self {
        let font_size = loaded_or_default(prefs.get_f64(PREF_FONT_SIZE), DEFAULT_FONT_SIZE);
        let edge = font_size + 2.0 * WINDOW_PADDING;

        let text_color = prefs
            .get_string(PREF_TEXT_COLOR)
            .as_deref()
            .and_then(Rgb::from_hex)
            .unwrap_or(Rgb::WHITE);
        let background_color = prefs
            .get_string(PREF_BACKGROUND_COLOR)
            .as_deref()
            .and_then(Rgb::from_hex)
            .unwrap_or(Rgb::BLACK);

        Self {
            window_x: loaded_or_default(prefs.get_f64(PREF_WINDOW_X), DEFAULT_POSITION.0),
            window_y: loaded_or_default(prefs.get_f64(PREF_WINDOW_Y), DEFAULT_POSITION.1),
            window_width: edge,
            window_height: edge,
            font_size,
            text_color,
            background_color,
            opacity: loaded_or_default(prefs.get_f64(PREF_OPACITY), DEFAULT_OPACITY),
            auto_start: prefs.get_bool(PREF_AUTO_START).unwrap_or(false),
            prefs,
            notify,
        }
    }

    // === Getters ===

    pub fn window_x(&self) -> f64 {
        self.window_x
    }

    pub fn window_y(&self) -> f64 {
        self.window_y
    }

    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    pub fn window_height(&self) -> f64 {
        self.window_height
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn text_color(&self) -> Rgb {
        self.text_color
    }

    pub fn background_color(&self) -> Rgb {
        self.background_color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Window frame as (x, y, width, height).
    pub fn frame(&self) -> (f64, f64, f64, f64) {
        (
            self.window_x,
            self.window_y,
            self.window_width,
            self.window_height,
        )
    }

    /// Badge corner radius, derived from the font size by fixed thresholds.
    pub fn corner_radius(&self) -> f64 {
        match self.font_size {
            f if f < 20.0 => CORNER_RADIUS_SMALL,
            f if f < 30.0 => CORNER_RADIUS_MEDIUM,
            f if f < 50.0 => CORNER_RADIUS_LARGE,
            _ => CORNER_RADIUS_XLARGE,
        }
    }

    // === Mutators ===
    // Each one persists, then notifies once.

    /// Move the window origin. Called by the window synchronizer after the
    /// debounce quiet period, never mid-drag.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.window_x = x;
        self.window_y = y;
        self.prefs.set_f64(PREF_WINDOW_X, x);
        self.prefs.set_f64(PREF_WINDOW_Y, y);
        debug!(x, y, "position persisted");
        self.notify.publish(AppEvent::ConfigChanged);
    }

    /// Set the glyph font size. Window width and height are recomputed
    /// together; they are never set on their own.
    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
        let edge = font_size + 2.0 * WINDOW_PADDING;
        self.window_width = edge;
        self.window_height = edge;
        self.prefs.set_f64(PREF_FONT_SIZE, font_size);
        self.prefs.set_f64(PREF_WINDOW_WIDTH, edge);
        self.prefs.set_f64(PREF_WINDOW_HEIGHT, edge);
        self.notify.publish(AppEvent::ConfigChanged);
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
        self.prefs.set_string(PREF_TEXT_COLOR, &color.to_hex());
        self.notify.publish(AppEvent::ConfigChanged);
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.background_color = color;
        self.prefs
            .set_string(PREF_BACKGROUND_COLOR, &color.to_hex());
        self.notify.publish(AppEvent::ConfigChanged);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp(opacity, 0.0, 1.0);
        self.prefs.set_f64(PREF_OPACITY, self.opacity);
        self.notify.publish(AppEvent::ConfigChanged);
    }

    /// Persist the launch-at-login flag. Registration with the OS login-item
    /// service is handled outside this core.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.auto_start = auto_start;
        self.prefs.set_bool(PREF_AUTO_START, auto_start);
        self.notify.publish(AppEvent::ConfigChanged);
    }

    /// Restore the full default value set, anchoring the window to the
    /// top-right corner of `screen` with a fixed margin.
    ///
    /// All fields are assigned and persisted first, then a single
    /// `ConfigChanged` is published, so observers see one coherent change
    /// instead of one notification per field.
    pub fn reset_to_defaults(&mut self, screen: ScreenFrame) {
        let edge = RESET_FONT_SIZE + 2.0 * WINDOW_PADDING;

        self.window_x = screen.max_x() - edge - RESET_MARGIN;
        self.window_y = screen.min_y() + RESET_MARGIN;
        self.font_size = RESET_FONT_SIZE;
        self.window_width = edge;
        self.window_height = edge;
        self.text_color = Rgb::WHITE;
        self.background_color = Rgb::BLACK;
        self.opacity = RESET_OPACITY;
        self.auto_start = false;

        self.prefs.set_f64(PREF_WINDOW_X, self.window_x);
        self.prefs.set_f64(PREF_WINDOW_Y, self.window_y);
        self.prefs.set_f64(PREF_FONT_SIZE, self.font_size);
        self.prefs.set_f64(PREF_WINDOW_WIDTH, edge);
        self.prefs.set_f64(PREF_WINDOW_HEIGHT, edge);
        self.prefs
            .set_string(PREF_TEXT_COLOR, &self.text_color.to_hex());
        self.prefs
            .set_string(PREF_BACKGROUND_COLOR, &self.background_color.to_hex());
        self.prefs.set_f64(PREF_OPACITY, self.opacity);
        self.prefs.set_bool(PREF_AUTO_START, false);

        debug!("config reset to defaults");
        self.notify.publish(AppEvent::ConfigChanged);
    }
}
