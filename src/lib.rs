//! Accessibility analysis of color palettes for data visualization.
//!
//! - [`Palette`]: an ordered list of colors, with its pairwise
//!   analysis [`Palette::pairs`], its [`Palette::score`] and its
//!   [`Palette::report`].
//! - [`delta_e`]: CIEDE2000 color difference and the
//!   [`Distinguishability`] classes derived from it.
//! - [`contrast_ratio`], [`WcagLevel`] and [`text_color_for`]: WCAG 2
//!   contrast.
//! - [`simulate`]: how colors are seen with a [`Deficiency`].
//!
//! Colors that cannot be parsed never make these functions fail: they
//! are treated as indistinguishable from any other color (ΔE and
//! contrast of `0.`).  Only [`parse`] reports errors.
//!
//! ```
//! use palette_a11y::score;
//! let s = score(&["#1b9e77", "#d95f02", "#7570b3", "#e7298a"]);
//! assert!(s.overall <= 100);
//! assert_eq!(s.total_pairs, 6);
//! ```

use rgb::{RGB, RGB8, RGB16, RGBA8, RGBA16};

mod color;
mod contrast;
mod cvd;
mod delta_e;
mod palette;
mod parse;
mod report;
mod score;

pub use color::{Color, Hsl, Lab};
pub use contrast::{
    contrast_ratio, contrast_ratio_str, relative_luminance,
    relative_luminance_str, text_color_for, text_color_for_str, WcagLevel,
    AAA_RATIO, AA_LARGE_RATIO, AA_RATIO, TEXT_LUMINANCE_THRESHOLD,
};
pub use cvd::{simulate, simulate_palette, simulate_str, Deficiency};
pub use delta_e::{
    ciede2000, delta_e, delta_e_str, Distinguishability, EXCELLENT_DELTA_E,
    GOOD_DELTA_E, POOR_DELTA_E,
};
pub use palette::{analyze_pairs, PairAnalysis, Palette};
pub use parse::{parse, ParseError};
pub use report::{CvdPreview, Report};
pub use score::{
    score, AccessibilityScore, CvdSafety, CONTRAST_POINTS, CVD_POINTS,
    CVD_SAFE_DELTA_E, DELTA_E_POINTS, PROBLEMATIC_DELTA_E,
};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 1\]).
    fn from_rgb(rgb: RGB<f64>) -> Self;

    #[inline]
    fn to_color(&self) -> Color { Color::Rgb(self.to_rgb()) }

    /// WCAG 2 relative luminance of the color.
    #[inline]
    fn relative_luminance(&self) -> f64 {
        contrast::relative_luminance(&self.to_color())
    }

    /// Return the color as seen with the deficiency `d`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_a11y::{RGBColor, Deficiency};
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(red.simulate(Deficiency::Protanopia), RGB8::new(109, 95, 0));
    /// ```
    fn simulate(&self, d: Deficiency) -> Self {
        Self::from_rgb(cvd::simulate_rgb(self.to_rgb(), d))
    }

    /// CIEDE2000 difference with `other`.
    fn delta_e(&self, other: &Self) -> f64 {
        delta_e::delta_e(&self.to_color(), &other.to_color())
    }

    /// Convert the color to grayscale, keeping its relative luminance.
    fn to_gray(&self) -> Self {
        let y = self.relative_luminance();
        let x = if y <= 0.0031308 { 12.92 * y }
                else { 1.055 * y.powf(1. / 2.4) - 0.055 };
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for Color {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { Color::to_rgb(self) }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { Color::Rgb(c) }

    #[inline]
    fn to_color(&self) -> Color { *self }
}

#[inline]
fn quantize(x: f64, max: f64) -> f64 { (x.clamp(0., 1.) * max).round() }

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
             b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: quantize(c.r, 255.) as u8,  g: quantize(c.g, 255.) as u8,
               b: quantize(c.b, 255.) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
             b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB16 { r: quantize(c.r, 65535.) as u16,
                g: quantize(c.g, 65535.) as u16,
                b: quantize(c.b, 65535.) as u16 }
    }
}

// Palettes are opaque: the alpha component is ignored on input and
// set to opaque on output.

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB8 { r: self.r, g: self.g, b: self.b }.to_rgb()
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let c = RGB8::from_rgb(c);
        RGBA8 { r: c.r, g: c.g, b: c.b, a: 255 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB16 { r: self.r, g: self.g, b: self.b }.to_rgb()
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let c = RGB16::from_rgb(c);
        RGBA16 { r: c.r, g: c.g, b: c.b, a: 65535 }
    }
}
