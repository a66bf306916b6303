//! Color values and conversions between the sRGB, HSL and CIE L*a*b*
//! color spaces.

use std::fmt;
use rgb::{RGB, RGB8};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color expressed in one of the supported color spaces.
///
/// Each variant only carries the components of its own space.  Use
/// [`Color::to_rgb`], [`Color::to_hsl`] and [`Color::to_lab`] to
/// convert between them.  All conversions go through sRGB with a D65
/// reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// sRGB (gamma encoded) with components in \[0, 1\].
    Rgb(RGB<f64>),
    /// Hue, saturation and lightness.
    Hsl(Hsl),
    /// CIE L*a*b* with a D65 white point.
    Lab(Lab),
}

/// The HSL representation of an sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    /// The hue in degrees, in \[0, 360).
    pub h: f64,
    /// The saturation in percent, in \[0, 100\].
    pub s: f64,
    /// The lightness in percent, in \[0, 100\].
    pub l: f64,
}

/// A color in the CIE L*a*b* color space (D65 white point).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    /// Green (negative) to red (positive) axis, roughly in \[-128, 127\].
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis, roughly in \[-128, 127\].
    pub b: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self { Lab { l, a, b } }

    /// The chroma `sqrt(a² + b²)`.
    pub fn chroma(&self) -> f64 { self.a.hypot(self.b) }
}

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

/// sRGB decoding of a component in \[0, 1\] (IEC 61966-2-1).
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// sRGB encoding of a linear component in \[0, 1\].
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

fn clamp01(c: RGB<f64>) -> RGB<f64> {
    RGB { r: c.r.clamp(0., 1.), g: c.g.clamp(0., 1.), b: c.b.clamp(0., 1.) }
}

fn rgb_to_lab(c: RGB<f64>) -> Lab {
    let r = srgb_to_linear(c.r);
    let g = srgb_to_linear(c.g);
    let b = srgb_to_linear(c.b);
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;
    let f = |t: f64| if t > EPS { t.cbrt() }
                     else { t / (3. * EPS0 * EPS0) + 4. / 29. };
    let fx = f(x / XN);
    let fy = f(y / YN);
    let fz = f(z / ZN);
    Lab { l: 116. * fy - 16., a: 500. * (fx - fy), b: 200. * (fy - fz) }
}

fn lab_to_rgb(lab: Lab) -> RGB<f64> {
    let fy = (lab.l + 16.) / 116.;
    let fx = fy + lab.a / 500.;
    let fz = fy - lab.b / 200.;
    let f_inv = |t: f64| if t > EPS0 { t * t * t }
                         else { 3. * EPS0 * EPS0 * (t - 4. / 29.) };
    let x = XN * f_inv(fx);
    let y = YN * f_inv(fy);
    let z = ZN * f_inv(fz);
    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
    clamp01(RGB { r: linear_to_srgb(r.max(0.)),
                  g: linear_to_srgb(g.max(0.)),
                  b: linear_to_srgb(b.max(0.)) })
}

fn rgb_to_hsl(c: RGB<f64>) -> Hsl {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let l = (max + min) / 2.;
    let d = max - min;
    if d == 0. {
        return Hsl { h: 0., s: 0., l: 100. * l }
    }
    let s = d / (1. - (2. * l - 1.).abs());
    let h = {
        if max == c.r { (c.g - c.b) / d }
        else if max == c.g { (c.b - c.r) / d + 2. }
        else { (c.r - c.g) / d + 4. } };
    Hsl { h: (60. * h).rem_euclid(360.), s: 100. * s, l: 100. * l }
}

fn hsl_to_rgb(hsl: Hsl) -> RGB<f64> {
    let s = (hsl.s / 100.).clamp(0., 1.);
    let l = (hsl.l / 100.).clamp(0., 1.);
    let c = (1. - (2. * l - 1.).abs()) * s;
    let h = hsl.h.rem_euclid(360.) / 60.;
    let x = c * (1. - (h.rem_euclid(2.) - 1.).abs());
    let m = l - c / 2.;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.),
        1 => (x, c, 0.),
        2 => (0., c, x),
        3 => (0., x, c),
        4 => (x, 0., c),
        _ => (c, 0., x),
    };
    clamp01(RGB { r: r + m, g: g + m, b: b + m })
}

impl Color {
    pub const BLACK: Color = Color::Rgb(RGB { r: 0., g: 0., b: 0. });
    pub const WHITE: Color = Color::Rgb(RGB { r: 1., g: 1., b: 1. });

    /// Create a color from 8 bit sRGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(RGB { r: r as f64 / 255.,
                         g: g as f64 / 255.,
                         b: b as f64 / 255. })
    }

    /// Return the sRGB components of the color, in \[0, 1\].  Colors
    /// outside the sRGB gamut are clamped.
    pub fn to_rgb(&self) -> RGB<f64> {
        match *self {
            Color::Rgb(c) => clamp01(c),
            Color::Hsl(hsl) => hsl_to_rgb(hsl),
            Color::Lab(lab) => lab_to_rgb(lab),
        }
    }

    /// Return the sRGB components of the color, in \[0, 255\].
    pub fn to_rgb8(&self) -> RGB8 {
        let c = self.to_rgb();
        let q = |x: f64| (255. * x).round() as u8;
        RGB8 { r: q(c.r), g: q(c.g), b: q(c.b) }
    }

    pub fn to_hsl(&self) -> Hsl {
        match *self {
            Color::Hsl(hsl) => hsl,
            _ => rgb_to_hsl(self.to_rgb()),
        }
    }

    pub fn to_lab(&self) -> Lab {
        match *self {
            Color::Lab(lab) => lab,
            _ => rgb_to_lab(self.to_rgb()),
        }
    }

    /// Return the color in the sRGB space.
    pub fn into_rgb(self) -> Self { Color::Rgb(self.to_rgb()) }

    /// Return the color in the HSL space.
    pub fn into_hsl(self) -> Self { Color::Hsl(self.to_hsl()) }

    /// Return the color in the CIE L*a*b* space.
    pub fn into_lab(self) -> Self { Color::Lab(self.to_lab()) }

    /// Canonical lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use palette_a11y::Color;
    /// let c: Color = "#FF8000".parse().unwrap();
    /// assert_eq!(c.to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(&self) -> String {
        let c = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self { Color::from_rgb8(c.r, c.g, c.b) }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self { Color::Hsl(hsl) }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self { Color::Lab(lab) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(c0: RGB8, c1: RGB8) -> bool {
        let d = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 1;
        d(c0.r, c1.r) && d(c0.g, c1.g) && d(c0.b, c1.b)
    }

    // A coarse walk through the 8 bit cube, including both ends.
    fn samples() -> impl Iterator<Item = RGB8> {
        let steps = [0u8, 1, 17, 64, 127, 128, 200, 254, 255];
        steps.into_iter().flat_map(move |r| {
            steps.into_iter().flat_map(move |g| {
                steps.into_iter().map(move |b| RGB8 { r, g, b }) }) })
    }

    #[test]
    fn lab_round_trip() {
        for c in samples() {
            let back = Color::from(c).into_lab().to_rgb8();
            assert!(close(c, back), "{:?} -> {:?}", c, back);
        }
    }

    #[test]
    fn hsl_round_trip() {
        for c in samples() {
            let back = Color::from(c).into_hsl().to_rgb8();
            assert!(close(c, back), "{:?} -> {:?}", c, back);
        }
    }

    #[test]
    fn lab_reference_values() {
        let white = Color::WHITE.to_lab();
        assert!((white.l - 100.).abs() < 0.01);
        assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
        let black = Color::BLACK.to_lab();
        assert!(black.l.abs() < 1e-9);
        let red = Color::from_rgb8(255, 0, 0).to_lab();
        assert!((red.l - 53.24).abs() < 0.05, "L = {}", red.l);
        assert!((red.a - 80.09).abs() < 0.05, "a = {}", red.a);
        assert!((red.b - 67.20).abs() < 0.05, "b = {}", red.b);
    }

    #[test]
    fn hsl_reference_values() {
        let hsl = Color::from_rgb8(255, 0, 0).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0., 100., 50.));
        let hsl = Color::from_rgb8(0, 0, 255).to_hsl();
        assert!((hsl.h - 240.).abs() < 1e-9);
        let gray = Color::from_rgb8(128, 128, 128).to_hsl();
        assert_eq!(gray.s, 0.);
        assert_eq!(Color::Hsl(Hsl::new(120., 100., 25.)).to_hex(), "#008000");
    }

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(Color::from_rgb8(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
        assert_eq!(format!("{}", Color::WHITE), "#ffffff");
    }
}
