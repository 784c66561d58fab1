//! Classification of raw input sources into display symbols.
//!
//! Pure and stateless: everything here is a function of the snapshot the
//! platform layer hands over, so the whole mapping is testable without the
//! Text Input Source Services runtime.

/// A point-in-time view of the active input source. Rebuilt on every query;
/// never persisted. Missing OS properties are substituted with empty strings
/// or `false` before a snapshot is built, so classification never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSourceSnapshot {
    /// Raw source identifier, e.g. "com.apple.keylayout.US".
    pub source_id: String,
    /// Localized human-readable name, e.g. "拼音 - 简体".
    pub localized_name: String,
    /// True if the OS reports the source type as a plain keyboard layout
    /// (as opposed to an input-method engine).
    pub is_keyboard_layout: bool,
    /// Physical caps-lock modifier state at snapshot time.
    pub caps_lock: bool,
}

/// The simplified input-source state shown to the user.
///
/// `Unknown` is the sentinel for "no input source could be queried"; the
/// classifier itself only ever produces the other four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySymbol {
    /// A CJK input method in native entry mode ("中").
    ChineseActive,
    /// A CJK input method toggled to direct ASCII entry ("英").
    ChineseLatin,
    /// A Latin layout, caps lock off ("a").
    LatinLower,
    /// A Latin layout, caps lock on ("A").
    LatinUpper,
    /// The OS could not supply an input source.
    Unknown,
}

impl DisplaySymbol {
    /// The glyph rendered in the indicator badge.
    pub fn glyph(self) -> &'static str {
        match self {
            DisplaySymbol::ChineseActive => "中",
            DisplaySymbol::ChineseLatin => "英",
            DisplaySymbol::LatinLower => "a",
            DisplaySymbol::LatinUpper => "A",
            DisplaySymbol::Unknown => "?",
        }
    }
}

/// Source-id substrings that mark a CJK input method.
const CHINESE_ID_MARKERS: &[&str] = &[
    "Pinyin",
    "Chinese",
    "Wubi",
    "Shuangpin",
    "com.apple.inputmethod.SCIM",
    "com.sogou",
    "com.baidu",
];

/// Localized-name substrings that mark a CJK input method.
const CHINESE_NAME_MARKERS: &[&str] = &["拼音", "中文", "简体", "繁体"];

/// True if either the identifier or the localized name denotes a known
/// CJK input-method family.
fn is_chinese_family(source_id: &str, name: &str) -> bool {
    CHINESE_ID_MARKERS.iter().any(|m| source_id.contains(m))
        || CHINESE_NAME_MARKERS.iter().any(|m| name.contains(m))
}

/// Whether the source is currently entering plain ASCII.
///
/// Plain keyboard layouts have no "alphabetic vs native" toggle of their
/// own, so the caps-lock state substitutes. CJK engines commonly toggle to
/// direct ASCII entry via caps lock as well.
fn is_ascii_mode(snapshot: &InputSourceSnapshot) -> bool {
    let id = &snapshot.source_id;

    if id.contains("keylayout") && !id.contains("inputmethod") {
        return snapshot.caps_lock;
    }

    if snapshot.is_keyboard_layout {
        return true;
    }

    if id.contains("SCIM") || id.contains("Pinyin") || id.contains("Chinese") {
        return snapshot.caps_lock;
    }

    false
}

/// Map a snapshot to the symbol the indicator shows.
pub fn classify(snapshot: &InputSourceSnapshot) -> DisplaySymbol {
    let chinese = is_chinese_family(&snapshot.source_id, &snapshot.localized_name);
    let ascii = is_ascii_mode(snapshot);

    match (chinese, ascii) {
        (true, false) => DisplaySymbol::ChineseActive,
        (true, true) => DisplaySymbol::ChineseLatin,
        (false, true) => DisplaySymbol::LatinUpper,
        (false, false) => DisplaySymbol::LatinLower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(id: &str, caps: bool) -> InputSourceSnapshot {
        InputSourceSnapshot {
            source_id: id.to_string(),
            localized_name: String::new(),
            is_keyboard_layout: true,
            caps_lock: caps,
        }
    }

    fn input_method(id: &str, name: &str, caps: bool) -> InputSourceSnapshot {
        InputSourceSnapshot {
            source_id: id.to_string(),
            localized_name: name.to_string(),
            is_keyboard_layout: false,
            caps_lock: caps,
        }
    }

    #[test]
    fn us_layout_tracks_caps_lock() {
        assert_eq!(
            classify(&layout("com.apple.keylayout.US", false)),
            DisplaySymbol::LatinLower
        );
        assert_eq!(
            classify(&layout("com.apple.keylayout.US", true)),
            DisplaySymbol::LatinUpper
        );
    }

    #[test]
    fn pinyin_engine_tracks_caps_lock() {
        let snap = input_method("com.apple.inputmethod.SCIM.ITABC", "拼音 - 简体", false);
        assert_eq!(classify(&snap), DisplaySymbol::ChineseActive);

        let snap = input_method("com.apple.inputmethod.SCIM.ITABC", "拼音 - 简体", true);
        assert_eq!(classify(&snap), DisplaySymbol::ChineseLatin);
    }

    #[test]
    fn vendor_engines_are_chinese() {
        for id in ["com.sogou.inputmethod.sogou", "com.baidu.inputmethod.BaiduIM"] {
            assert_eq!(
                classify(&input_method(id, "", false)),
                DisplaySymbol::ChineseActive,
                "id {id}"
            );
        }
    }

    #[test]
    fn chinese_detected_by_localized_name_alone() {
        let snap = input_method("com.example.ime", "中文（简体）", false);
        assert_eq!(classify(&snap), DisplaySymbol::ChineseActive);
    }

    #[test]
    fn wubi_and_shuangpin_are_chinese() {
        // Neither carries SCIM/Pinyin/Chinese in the id, so ASCII mode stays
        // false regardless of caps lock.
        let snap = input_method("com.apple.inputmethod.Wubi", "", true);
        assert_eq!(classify(&snap), DisplaySymbol::ChineseActive);
        let snap = input_method("com.example.Shuangpin", "", false);
        assert_eq!(classify(&snap), DisplaySymbol::ChineseActive);
    }

    #[test]
    fn non_chinese_engine_defaults_to_lowercase() {
        // Unknown engine, not a layout: conservative non-ASCII, non-Chinese.
        let snap = input_method("com.example.kotoeri", "Hiragana", true);
        assert_eq!(classify(&snap), DisplaySymbol::LatinLower);
    }

    #[test]
    fn keyboard_layout_type_forces_ascii() {
        // Type says layout but the id lacks "keylayout": rule 2 applies and
        // ASCII mode is unconditional.
        let mut snap = layout("com.example.customlayout", false);
        snap.source_id = "com.example.customlayout".to_string();
        assert_eq!(classify(&snap), DisplaySymbol::LatinUpper);
    }

    #[test]
    fn empty_snapshot_is_lowercase_latin() {
        assert_eq!(
            classify(&InputSourceSnapshot::default()),
            DisplaySymbol::LatinLower
        );
    }

    #[test]
    fn glyphs_match_display_alphabet() {
        assert_eq!(DisplaySymbol::ChineseActive.glyph(), "中");
        assert_eq!(DisplaySymbol::ChineseLatin.glyph(), "英");
        assert_eq!(DisplaySymbol::LatinLower.glyph(), "a");
        assert_eq!(DisplaySymbol::LatinUpper.glyph(), "A");
        assert_eq!(DisplaySymbol::Unknown.glyph(), "?");
    }
}
