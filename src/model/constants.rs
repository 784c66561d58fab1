//! Configuration constants and default values.
//!
//! This module contains all application constants including appearance
//! defaults, NSUserDefaults keys, and the timing parameters of the
//! monitor and the debounced position save.

// === Appearance Defaults ===

/// Default glyph font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 26.0;

/// Font size applied by "reset to defaults".
pub const RESET_FONT_SIZE: f64 = 18.0;

/// Default badge opacity [0.0, 1.0].
pub const DEFAULT_OPACITY: f64 = 0.9;

/// Opacity applied by "reset to defaults".
pub const RESET_OPACITY: f64 = 1.0;

/// Padding added on each side of the glyph; window edge = font size + 2x this.
pub const WINDOW_PADDING: f64 = 10.0;

/// Margin from the screen's top-right corner used by "reset to defaults".
pub const RESET_MARGIN: f64 = 20.0;

/// Default window position when nothing has been persisted yet.
pub const DEFAULT_POSITION: (f64, f64) = (100.0, 100.0);

// === Timing ===

/// Poll interval of the input-source monitor, in seconds. Caps-lock driven
/// ASCII toggles inside the same source emit no notification, so polling
/// is the only way to observe them.
pub const POLL_INTERVAL_SECS: f64 = 0.2;

/// Quiet period after the last window move before the position is persisted.
pub const SAVE_DEBOUNCE_SECS: f64 = 0.5;

// === NSUserDefaults Keys ===

/// Key for the window x origin.
pub const PREF_WINDOW_X: &str = "windowX";

/// Key for the window y origin.
pub const PREF_WINDOW_Y: &str = "windowY";

/// Key for the window width (always font size + 2x padding).
pub const PREF_WINDOW_WIDTH: &str = "windowWidth";

/// Key for the window height (always font size + 2x padding).
pub const PREF_WINDOW_HEIGHT: &str = "windowHeight";

/// Key for the glyph font size.
pub const PREF_FONT_SIZE: &str = "fontSize";

/// Key for the glyph color, stored as #RRGGBB.
pub const PREF_TEXT_COLOR: &str = "textColor";

/// Key for the badge background color, stored as #RRGGBB.
pub const PREF_BACKGROUND_COLOR: &str = "backgroundColor";

/// Key for the badge opacity.
pub const PREF_OPACITY: &str = "opacity";

/// Key for the launch-at-login flag.
pub const PREF_AUTO_START: &str = "autoStart";

// === Corner Radius Thresholds ===

/// Corner radius for font sizes in [0, 20).
pub const CORNER_RADIUS_SMALL: f64 = 3.0;

/// Corner radius for font sizes in [20, 30).
pub const CORNER_RADIUS_MEDIUM: f64 = 4.0;

/// Corner radius for font sizes in [30, 50).
pub const CORNER_RADIUS_LARGE: f64 = 6.0;

/// Corner radius for font sizes of 50 and above.
pub const CORNER_RADIUS_XLARGE: f64 = 8.0;
