//! Attachment color resolution
//!
//! Named colors map to fixed hex codes; everything else passes through
//! untouched and is classified purely syntactically.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Named colors accepted by the `color` input.
pub const NAMED_COLORS: [(&str, &str); 8] = [
    ("black", "#000000"),
    ("red", "#F44336"),
    ("green", "#4CAF50"),
    ("yellow", "#FFEB3B"),
    ("blue", "#2196F3"),
    ("magenta", "#E91E63"),
    ("cyan", "#00BCD4"),
    ("white", "#FFFFFF"),
];

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
});

/// Resolve a named color to its hex code.
///
/// Unknown names are returned as-is (borrowed).
#[inline]
pub fn resolve_color(color: &str) -> Cow<'_, str> {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == color)
        .map(|(_, hex)| Cow::Borrowed(*hex))
        .unwrap_or(Cow::Borrowed(color))
}

/// `true` iff `color` is `#` followed by exactly 3 or 6 hex digits.
#[inline]
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}
