//! Aggregate accessibility score of a palette.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(debug_assertions)]
use tracing::instrument;
use crate::{
    cvd::Deficiency,
    delta_e::GOOD_DELTA_E,
    palette::{PairAnalysis, Palette},
};

/// Pairs with a ΔE below this are counted as problematic.
pub const PROBLEMATIC_DELTA_E: f64 = GOOD_DELTA_E;
/// A palette is safe for a deficiency if no simulated pair has a ΔE
/// below this.
pub const CVD_SAFE_DELTA_E: f64 = 3.;

/// Points awarded for the smallest ΔE, reached at ΔE = 10.
pub const DELTA_E_POINTS: f64 = 40.;
/// Points awarded for the mean contrast ratio, reached at 4.5.
pub const CONTRAST_POINTS: f64 = 30.;
/// Points awarded for each deficiency the palette is safe for.
pub const CVD_POINTS: f64 = 10.;

/// Whether a palette stays distinguishable for each deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CvdSafety {
    pub protanopia: bool,
    pub deuteranopia: bool,
    pub tritanopia: bool,
}

impl CvdSafety {
    pub fn get(&self, d: Deficiency) -> bool {
        match d {
            Deficiency::Protanopia => self.protanopia,
            Deficiency::Deuteranopia => self.deuteranopia,
            Deficiency::Tritanopia => self.tritanopia,
        }
    }

    /// Number of deficiencies the palette is safe for.
    pub fn count(&self) -> usize {
        Deficiency::ALL.iter().filter(|&&d| self.get(d)).count()
    }

    pub fn all(&self) -> bool { self.count() == Deficiency::ALL.len() }
}

/// Summary of the accessibility of a palette.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessibilityScore {
    /// Overall score in \[0, 100\].
    pub overall: u8,
    pub min_delta_e: f64,
    pub avg_delta_e: f64,
    pub min_contrast: f64,
    pub avg_contrast: f64,
    /// Number of pairs with ΔE < 5.
    pub problematic_pairs: usize,
    pub total_pairs: usize,
    pub cvd_safe: CvdSafety,
}

impl AccessibilityScore {
    /// The score of palettes with less than two colors.
    pub const PERFECT: AccessibilityScore = AccessibilityScore {
        overall: 100,
        min_delta_e: 0.,
        avg_delta_e: 0.,
        min_contrast: 0.,
        avg_contrast: 0.,
        problematic_pairs: 0,
        total_pairs: 0,
        cvd_safe: CvdSafety { protanopia: true, deuteranopia: true,
                              tritanopia: true },
    };

    /// Fraction of the pairs that are problematic, `0.` if there are
    /// no pairs.
    pub fn problematic_ratio(&self) -> f64 {
        if self.total_pairs == 0 { 0. }
        else { self.problematic_pairs as f64 / self.total_pairs as f64 }
    }

    /// Whether the palette is safe for all deficiencies.
    pub fn is_cvd_safe(&self) -> bool { self.cvd_safe.all() }
}

/// Whether no pair of `pairs` falls below [`CVD_SAFE_DELTA_E`].
pub(crate) fn is_safe(pairs: &[PairAnalysis]) -> bool {
    pairs.iter().all(|p| p.delta_e >= CVD_SAFE_DELTA_E)
}

/// Score computed from the pairs of the palette and its CVD safety.
fn aggregate(pairs: &[PairAnalysis], cvd_safe: CvdSafety)
             -> AccessibilityScore {
    let n = pairs.len() as f64;
    let delta_e = || pairs.iter().map(|p| p.delta_e);
    let contrast = || pairs.iter().map(|p| p.contrast_ratio);
    let min_delta_e = delta_e().fold(f64::INFINITY, f64::min);
    let avg_delta_e = delta_e().sum::<f64>() / n;
    let min_contrast = contrast().fold(f64::INFINITY, f64::min);
    let avg_contrast = contrast().sum::<f64>() / n;
    // Unparseable colors have a contrast of 0 which would make the
    // contrast term negative.
    let delta_e_score = (min_delta_e / 10. * DELTA_E_POINTS)
        .clamp(0., DELTA_E_POINTS);
    let contrast_score = ((avg_contrast - 1.) / 3.5 * CONTRAST_POINTS)
        .clamp(0., CONTRAST_POINTS);
    let cvd_score = CVD_POINTS * cvd_safe.count() as f64;
    let overall = (delta_e_score + contrast_score + cvd_score).round()
        .clamp(0., 100.) as u8;
    AccessibilityScore {
        overall,
        min_delta_e,
        avg_delta_e,
        min_contrast,
        avg_contrast,
        problematic_pairs: pairs.iter()
            .filter(|p| p.delta_e < PROBLEMATIC_DELTA_E).count(),
        total_pairs: pairs.len(),
        cvd_safe,
    }
}

impl Palette {
    /// Whether the palette stays distinguishable with the deficiency `d`.
    pub fn is_safe_for(&self, d: Deficiency) -> bool {
        is_safe(&self.simulate(d).pairs())
    }

    /// Compute the accessibility score of the palette.
    ///
    /// ```
    /// use palette_a11y::Palette;
    /// let s = Palette::new(["#000000", "#ffffff"]).score();
    /// assert_eq!(s.overall, 100);
    /// let s = Palette::new(["#ff0000", "#ff0000"]).score();
    /// assert_eq!(s.overall, 0);
    /// ```
    #[cfg_attr(debug_assertions, instrument(skip(self), fields(len = self.len())))]
    pub fn score(&self) -> AccessibilityScore {
        if self.len() < 2 { return AccessibilityScore::PERFECT }
        let cvd_safe = CvdSafety {
            protanopia: self.is_safe_for(Deficiency::Protanopia),
            deuteranopia: self.is_safe_for(Deficiency::Deuteranopia),
            tritanopia: self.is_safe_for(Deficiency::Tritanopia),
        };
        self.score_from(&self.pairs(), cvd_safe)
    }

    /// Score of the palette given its pairs and its CVD safety.
    pub(crate) fn score_from(&self, pairs: &[PairAnalysis], cvd_safe: CvdSafety)
                             -> AccessibilityScore {
        if self.len() < 2 { return AccessibilityScore::PERFECT }
        let invalid = self.invalid_indices();
        if !invalid.is_empty() {
            tracing::warn!(?invalid, "palette contains unparseable colors");
        }
        let score = aggregate(pairs, cvd_safe);
        tracing::debug!(overall = score.overall,
                        min_delta_e = score.min_delta_e,
                        problematic = score.problematic_pairs,
                        "palette scored");
        score
    }
}

/// Accessibility score of a list of color strings.  See
/// [`Palette::score`].
pub fn score<S: AsRef<str>>(palette: &[S]) -> AccessibilityScore {
    Palette::new(palette).score()
}
