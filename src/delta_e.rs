//! CIEDE2000 color difference.
//!
//! See G. Sharma, W. Wu, E. N. Dalal, “The CIEDE2000 color-difference
//! formula: implementation notes, supplementary test data, and
//! mathematical observations”, Color Research & Application 30 (2005).

use std::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{color::{Color, Lab}, parse::parse};

/// ΔE from which two colors are considered [`Distinguishability::Excellent`].
pub const EXCELLENT_DELTA_E: f64 = 10.;
/// ΔE from which two colors are considered [`Distinguishability::Good`].
pub const GOOD_DELTA_E: f64 = 5.;
/// ΔE from which two colors are considered [`Distinguishability::Poor`].
pub const POOR_DELTA_E: f64 = 2.;

const POW7_25: f64 = 6103515625.; // 25⁷

/// Hue angle in degrees in \[0, 360).
fn hue(a: f64, b: f64) -> f64 {
    if a == 0. && b == 0. { return 0. }
    let h = b.atan2(a).to_degrees();
    if h < 0. { h + 360. } else { h }
}

/// CIEDE2000 difference between two CIE L*a*b* colors, with the
/// parametric factors k_L = k_C = k_H = 1.
pub fn ciede2000(lab1: &Lab, lab2: &Lab) -> f64 {
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.;
    let c7 = c_mean.powi(7);
    let g = 0.5 * (1. - (c7 / (c7 + POW7_25)).sqrt());
    let a1 = (1. + g) * lab1.a;
    let a2 = (1. + g) * lab2.a;
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue(a1, lab1.b);
    let h2 = hue(a2, lab2.b);
    let cc = c1 * c2;

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let dh = {
        if cc == 0. { 0. }
        else if (h2 - h1).abs() <= 180. { h2 - h1 }
        else if h2 - h1 > 180. { h2 - h1 - 360. }
        else { h2 - h1 + 360. } };
    let dhh = 2. * cc.sqrt() * (dh.to_radians() / 2.).sin();

    let l_mean = (lab1.l + lab2.l) / 2.;
    let c_mean = (c1 + c2) / 2.;
    let h_mean = {
        if cc == 0. { h1 + h2 }
        else if (h1 - h2).abs() <= 180. { (h1 + h2) / 2. }
        else if h1 + h2 < 360. { (h1 + h2 + 360.) / 2. }
        else { (h1 + h2 - 360.) / 2. } };

    let t = 1. - 0.17 * (h_mean - 30.).to_radians().cos()
        + 0.24 * (2. * h_mean).to_radians().cos()
        + 0.32 * (3. * h_mean + 6.).to_radians().cos()
        - 0.20 * (4. * h_mean - 63.).to_radians().cos();
    let l50 = (l_mean - 50.) * (l_mean - 50.);
    let sl = 1. + 0.015 * l50 / (20. + l50).sqrt();
    let sc = 1. + 0.045 * c_mean;
    let sh = 1. + 0.015 * c_mean * t;
    // Rotation of the ellipses in the blue region.
    let d_theta = 30. * (-((h_mean - 275.) / 25.).powi(2)).exp();
    let c7 = c_mean.powi(7);
    let rc = 2. * (c7 / (c7 + POW7_25)).sqrt();
    let rt = -(2. * d_theta).to_radians().sin() * rc;

    let l = dl / sl;
    let c = dc / sc;
    let h = dhh / sh;
    (l * l + c * c + h * h + rt * c * h).max(0.).sqrt()
}

/// CIEDE2000 difference between two colors.
pub fn delta_e(c1: &Color, c2: &Color) -> f64 {
    ciede2000(&c1.to_lab(), &c2.to_lab())
}

/// Same as [`delta_e`] for color strings.  Returns `0.` if one of them
/// cannot be parsed.
pub fn delta_e_str(c1: &str, c2: &str) -> f64 {
    match (parse(c1), parse(c2)) {
        (Ok(c1), Ok(c2)) => delta_e(&c1, &c2),
        _ => {
            tracing::debug!(c1, c2, "unparseable color, ΔE taken as 0");
            0.
        }
    }
}

/// How easily two colors can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize),
           serde(rename_all = "lowercase"))]
pub enum Distinguishability {
    /// ΔE ≥ 10.
    Excellent,
    /// 5 ≤ ΔE < 10.
    Good,
    /// 2 ≤ ΔE < 5.
    Poor,
    /// ΔE < 2.
    Indistinguishable,
}

impl Distinguishability {
    /// Classify a CIEDE2000 difference.  NaN is classified as
    /// [`Distinguishability::Indistinguishable`].
    pub fn from_delta_e(de: f64) -> Self {
        use Distinguishability::*;
        if de >= EXCELLENT_DELTA_E { Excellent }
        else if de >= GOOD_DELTA_E { Good }
        else if de >= POOR_DELTA_E { Poor }
        else { Indistinguishable }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Distinguishability::Excellent => "excellent",
            Distinguishability::Good => "good",
            Distinguishability::Poor => "poor",
            Distinguishability::Indistinguishable => "indistinguishable",
        }
    }
}

impl fmt::Display for Distinguishability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharma_reference_pairs() {
        // (L1, a1, b1, L2, a2, b2, ΔE00) from Sharma et al., Table 1.
        let pairs = [
            (50., 2.6772, -79.7751, 50., 0., -82.7485, 2.0425),
            (50., 3.1571, -77.2803, 50., 0., -82.7485, 2.8615),
            (50., 2.8361, -74.0200, 50., 0., -82.7485, 3.4412),
            (50., -1.3802, -84.2814, 50., 0., -82.7485, 1.0000),
            (50., -1.1848, -84.8006, 50., 0., -82.7485, 1.0000),
            (50., -0.9009, -85.5211, 50., 0., -82.7485, 1.0000),
            (50., 0., 0., 50., -1., 2., 2.3669),
            (50., -1., 2., 50., 0., 0., 2.3669),
            (50., 2.4900, -0.0010, 50., -2.4900, 0.0009, 7.1792),
            (50., 2.4900, -0.0010, 50., -2.4900, 0.0010, 7.1792),
            (50., 2.4900, -0.0010, 50., -2.4900, 0.0011, 7.2195),
            (50., 2.4900, -0.0010, 50., -2.4900, 0.0012, 7.2195),
            (50., -0.0010, 2.4900, 50., 0.0009, -2.4900, 4.8045),
            (50., -0.0010, 2.4900, 50., 0.0010, -2.4900, 4.8045),
            (50., -0.0010, 2.4900, 50., 0.0011, -2.4900, 4.7461),
            (50., 2.5, 0., 50., 0., -2.5, 4.3065),
            (50., 2.5, 0., 73., 25., -18., 27.1492),
            (50., 2.5, 0., 61., -5., 29., 22.8977),
            (50., 2.5, 0., 56., -27., -3., 31.9030),
            (50., 2.5, 0., 58., 24., 15., 19.4535),
            (50., 2.5, 0., 50., 3.1736, 0.5854, 1.0000),
            (50., 2.5, 0., 50., 3.2972, 0., 1.0000),
            (50., 2.5, 0., 50., 1.8634, 0.5757, 1.0000),
            (50., 2.5, 0., 50., 3.2592, 0.3350, 1.0000),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
            (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
            (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
            (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
            (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
            (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
            (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
            (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
            (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
        ];
        for (i, &(l1, a1, b1, l2, a2, b2, expected)) in pairs.iter().enumerate() {
            let de = ciede2000(&Lab::new(l1, a1, b1), &Lab::new(l2, a2, b2));
            assert!((de - expected).abs() < 1e-4,
                    "pair {}: {} ≉ {}", i + 1, de, expected);
        }
    }

    #[test]
    fn symmetric_and_zero_on_identity() {
        let colors = ["#000000", "#ffffff", "#1f77b4", "#ff7f0e", "#2ca02c",
                      "#d62728", "#9467bd", "#00ffff"];
        for a in colors {
            assert_eq!(delta_e_str(a, a), 0.);
            for b in colors {
                let d = delta_e_str(a, b) - delta_e_str(b, a);
                assert!(d.abs() < 1e-9, "{} {}", a, b);
            }
        }
    }

    #[test]
    fn black_white() {
        let de = delta_e_str("#000000", "#ffffff");
        assert!((de - 100.).abs() < 0.01, "ΔE = {}", de);
    }

    #[test]
    fn unparseable_is_zero() {
        assert_eq!(delta_e_str("#ff0000", "not-a-color"), 0.);
        assert_eq!(delta_e_str("", "#ffffff"), 0.);
    }

    #[test]
    fn classification_boundaries() {
        use Distinguishability::*;
        let cases = [(0., Indistinguishable), (1.999, Indistinguishable),
                     (2., Poor), (4.999, Poor), (5., Good), (9.999, Good),
                     (10., Excellent), (100., Excellent),
                     (f64::NAN, Indistinguishable)];
        for (de, class) in cases {
            assert_eq!(Distinguishability::from_delta_e(de), class, "{}", de);
        }
        assert_eq!(Excellent.to_string(), "excellent");
    }
}
