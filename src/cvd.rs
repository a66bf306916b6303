//! Simulation of dichromatic color vision.
//!
//! Uses the matrices of G. M. Machado, M. M. Oliveira, L. A. F. Fernandes,
//! “A Physiologically-based Model for Simulation of Color Vision
//! Deficiency”, IEEE TVCG 15 (2009), at full severity.  They act on
//! linear sRGB.

use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use rgb::RGB;
use crate::{color::{Color, srgb_to_linear, linear_to_srgb}, parse::parse};

/// Type of color vision deficiency, each being the complete loss of
/// one cone type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize),
           serde(rename_all = "lowercase"))]
pub enum Deficiency {
    /// No L (red) cones.
    Protanopia,
    /// No M (green) cones.
    Deuteranopia,
    /// No S (blue) cones.
    Tritanopia,
}

impl Deficiency {
    pub const ALL: [Deficiency; 3] =
        [Deficiency::Protanopia, Deficiency::Deuteranopia,
         Deficiency::Tritanopia];

    fn matrix(&self) -> &'static [[f64; 3]; 3] {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
            Deficiency::Tritanopia => &TRITANOPIA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PROTANOPIA: [[f64; 3]; 3] = [
    [0.152286, 1.052583, -0.204868],
    [0.114503, 0.786281, 0.099216],
    [-0.003882, -0.048116, 1.051998]];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.367322, 0.860646, -0.227968],
    [0.280085, 0.672501, 0.047413],
    [-0.011820, 0.042940, 0.968881]];

const TRITANOPIA: [[f64; 3]; 3] = [
    [1.255528, -0.076749, -0.178779],
    [-0.078411, 0.930809, 0.147602],
    [0.004733, 0.691367, 0.303900]];

/// Simulate how an sRGB color (components in \[0, 1\]) is seen with
/// the deficiency `d`.
pub(crate) fn simulate_rgb(c: RGB<f64>, d: Deficiency) -> RGB<f64> {
    let m = d.matrix();
    let r = srgb_to_linear(c.r);
    let g = srgb_to_linear(c.g);
    let b = srgb_to_linear(c.b);
    let row = |i: usize| {
        let x = m[i][0] * r + m[i][1] * g + m[i][2] * b;
        linear_to_srgb(x.clamp(0., 1.)) };
    RGB { r: row(0), g: row(1), b: row(2) }
}

/// Return the color as seen with the deficiency `d`.
///
/// ```
/// use palette_a11y::{simulate, Color, Deficiency};
/// let red = Color::from_rgb8(255, 0, 0);
/// assert_eq!(simulate(&red, Deficiency::Deuteranopia).to_hex(), "#a39000");
/// ```
pub fn simulate(c: &Color, d: Deficiency) -> Color {
    Color::Rgb(simulate_rgb(c.to_rgb(), d))
}

/// Same as [`simulate`] on a color string, returning the result as
/// `#rrggbb`.  A string that cannot be parsed is returned unchanged.
pub fn simulate_str(c: &str, d: Deficiency) -> String {
    match parse(c) {
        Ok(color) => simulate(&color, d).to_hex(),
        Err(e) => {
            tracing::debug!(color = c, error = %e, deficiency = %d,
                            "unparseable color left unchanged");
            c.to_string()
        }
    }
}

/// Simulate every color of `palette`, preserving the order.
pub fn simulate_palette<S: AsRef<str>>(palette: &[S], d: Deficiency)
                                       -> Vec<String> {
    palette.iter().map(|c| simulate_str(c.as_ref(), d)).collect()
}
