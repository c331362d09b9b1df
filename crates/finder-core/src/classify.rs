/// Name classification against fixed character tables.
///
/// A name is checked one Unicode code point at a time (never byte-wise, so
/// multi-byte characters count as single units) against three static tables:
/// always-valid alphanumeric ranges, a warning range that flags a name for
/// review without invalidating it, and a small set of individually permitted
/// punctuation characters. Anything outside all three tables is invalid.

/// Inclusive code-point ranges that are always acceptable in a name.
pub const VALID_RANGES: [(u32, u32); 3] = [
    (48, 57),  // 0-9
    (65, 90),  // A-Z
    (97, 122), // a-z
];

/// Inclusive code-point ranges that are acceptable but flagged for review.
///
/// The bounds are deliberately the literal values the tool has always used
/// (the Cyrillic block А-Я/а-я; 1104 `ѐ` falls outside). Reports produced by
/// different builds must agree bit-for-bit, so the range is never re-derived
/// from Unicode tables.
pub const WARNING_RANGES: [(u32, u32); 1] = [
    (1040, 1103), // А-Я | а-я
];

/// Individually permitted punctuation code points.
pub const VALID_PUNCTUATION: [u32; 5] = [
    33,  // !
    45,  // -
    46,  // .
    95,  // _
    126, // ~
];

/// Outcome of classifying a single name.
///
/// The flags are independent: a name made of valid characters plus
/// warning-range characters is both valid and warned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_valid: bool,
    pub is_warning: bool,
}

/// `true` if the code point falls in one of the always-valid ranges.
pub fn is_valid_in_dictionaries(code_point: u32) -> bool {
    VALID_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&code_point))
}

/// `true` if the code point falls in the warning range.
pub fn is_warning_in_dictionaries(code_point: u32) -> bool {
    WARNING_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&code_point))
}

/// `true` if the code point is one of the permitted punctuation characters.
pub fn is_valid_punctuation(code_point: u32) -> bool {
    VALID_PUNCTUATION.contains(&code_point)
}

/// Classify a file or directory name.
///
/// Scans code points in order. A warning-range character sets the warning
/// flag and scanning continues. The first character outside every table
/// stops the scan immediately, so warning characters after it are not
/// observed — the under-reported warning flag on invalid names is
/// long-standing behavior that downstream report consumers rely on.
pub fn classify(name: &str) -> Classification {
    let mut is_warning = false;

    for ch in name.chars() {
        let code_point = ch as u32;

        if is_warning_in_dictionaries(code_point) {
            is_warning = true;
        } else if !is_valid_in_dictionaries(code_point) && !is_valid_punctuation(code_point) {
            return Classification {
                is_valid: false,
                is_warning,
            };
        }
    }

    Classification {
        is_valid: true,
        is_warning,
    }
}
