//! WCAG 2 relative luminance and contrast ratio.

use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{color::Color, parse::parse};

/// Minimum contrast ratio for level AAA (normal text).
pub const AAA_RATIO: f64 = 7.;
/// Minimum contrast ratio for level AA (normal text) and AAA (large text).
pub const AA_RATIO: f64 = 4.5;
/// Minimum contrast ratio for level AA (large text).
pub const AA_LARGE_RATIO: f64 = 3.;

/// Backgrounds with a relative luminance above this get black text.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.179;

/// WCAG 2 linearization of an sRGB component in \[0, 1\].
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance of the color, in \[0, 1\].
pub fn relative_luminance(c: &Color) -> f64 {
    let c = c.to_rgb();
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Relative luminance of a color string, `0.` if it cannot be parsed.
pub fn relative_luminance_str(c: &str) -> f64 {
    match parse(c) {
        Ok(c) => relative_luminance(&c),
        Err(e) => {
            tracing::debug!(color = c, error = %e, "luminance taken as 0");
            0.
        }
    }
}

/// Contrast ratio of two relative luminances.
pub(crate) fn ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors, in \[1, 21\].  The order of the
/// arguments does not matter.
///
/// ```
/// use palette_a11y::{contrast_ratio, Color};
/// let r = contrast_ratio(&Color::BLACK, &Color::WHITE);
/// assert!((r - 21.).abs() < 1e-9);
/// ```
pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
    ratio(relative_luminance(c1), relative_luminance(c2))
}

/// Contrast ratio between two color strings.  Returns `0.` (and not
/// the minimal ratio 1) if one of them cannot be parsed.
pub fn contrast_ratio_str(c1: &str, c2: &str) -> f64 {
    match (parse(c1), parse(c2)) {
        (Ok(c1), Ok(c2)) => contrast_ratio(&c1, &c2),
        _ => {
            tracing::debug!(c1, c2, "unparseable color, contrast taken as 0");
            0.
        }
    }
}

/// WCAG 2 conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WcagLevel {
    Fail,
    AA,
    AAA,
}

impl WcagLevel {
    /// Return the level reached by `ratio` for normal text (if
    /// `large_text` is `false`) or large text.
    pub fn from_ratio(ratio: f64, large_text: bool) -> Self {
        let (aaa, aa) = {
            if large_text { (AA_RATIO, AA_LARGE_RATIO) }
            else { (AAA_RATIO, AA_RATIO) } };
        if ratio >= aaa { WcagLevel::AAA }
        else if ratio >= aa { WcagLevel::AA }
        else { WcagLevel::Fail }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "Fail",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Black or white, whichever reads best on `background`.
pub fn text_color_for(background: &Color) -> Color {
    if relative_luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// `"#000000"` or `"#ffffff"`, whichever reads best on `background`.
/// Unparseable backgrounds get white text.
///
/// ```
/// use palette_a11y::text_color_for_str;
/// assert_eq!(text_color_for_str("#ffffff"), "#000000");
/// assert_eq!(text_color_for_str("#000000"), "#ffffff");
/// ```
pub fn text_color_for_str(background: &str) -> &'static str {
    if relative_luminance_str(background) > TEXT_LUMINANCE_THRESHOLD {
        "#000000"
    } else {
        "#ffffff"
    }
}
