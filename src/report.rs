//! Data for an accessibility report of a palette: all pairs, most
//! problematic first, and the palette as seen with each deficiency.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{
    cvd::Deficiency,
    delta_e::EXCELLENT_DELTA_E,
    palette::{PairAnalysis, Palette},
    score::{is_safe, AccessibilityScore, CvdSafety},
};

/// The palette as seen with one deficiency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CvdPreview {
    pub deficiency: Deficiency,
    /// Simulated colors, in the order of the palette.
    pub colors: Vec<String>,
    /// No simulated pair has a ΔE < 3.
    pub safe: bool,
    /// Smallest ΔE between simulated colors, `0.` for palettes with
    /// less than two colors.
    pub min_delta_e: f64,
}

impl CvdPreview {
    fn new(palette: &Palette, deficiency: Deficiency) -> Self {
        let simulated = palette.simulate(deficiency);
        let pairs = simulated.pairs();
        let min_delta_e = pairs.iter().map(|p| p.delta_e)
            .reduce(f64::min).unwrap_or(0.);
        CvdPreview {
            deficiency,
            colors: simulated.iter().map(String::from).collect(),
            safe: is_safe(&pairs),
            min_delta_e,
        }
    }

    /// `"Safe"` or `"Warning"`.
    pub fn label(&self) -> &'static str {
        if self.safe { "Safe" } else { "Warning" }
    }
}

/// Accessibility report of a palette.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub score: AccessibilityScore,
    /// All pairs sorted by increasing ΔE.  Pairs with the same ΔE are
    /// kept in lexicographic order of their indices.
    pub pairs: Vec<PairAnalysis>,
    /// One preview per deficiency, in the order of [`Deficiency::ALL`].
    pub previews: Vec<CvdPreview>,
}

impl Report {
    /// Pairs with a ΔE < 10, most problematic first.
    pub fn needs_attention(&self) -> impl Iterator<Item = &PairAnalysis> + '_ {
        self.pairs.iter().take_while(|p| p.delta_e < EXCELLENT_DELTA_E)
    }

    pub fn most_problematic(&self) -> Option<&PairAnalysis> {
        self.pairs.first()
    }

    pub fn preview(&self, d: Deficiency) -> Option<&CvdPreview> {
        self.previews.iter().find(|p| p.deficiency == d)
    }
}

impl Palette {
    /// Build the accessibility report of the palette.
    ///
    /// ```
    /// use palette_a11y::{Deficiency, Palette};
    /// let r = Palette::new(["#ff0000", "#00aa00", "#0000ff"]).report();
    /// assert_eq!(r.pairs.len(), 3);
    /// assert_eq!(r.preview(Deficiency::Deuteranopia).unwrap().label(),
    ///            "Warning");
    /// ```
    pub fn report(&self) -> Report {
        let previews: Vec<CvdPreview> = Deficiency::ALL.iter()
            .map(|&d| CvdPreview::new(self, d)).collect();
        let safe = |d: Deficiency|
            previews.iter().any(|p| p.deficiency == d && p.safe);
        let cvd_safe = CvdSafety {
            protanopia: safe(Deficiency::Protanopia),
            deuteranopia: safe(Deficiency::Deuteranopia),
            tritanopia: safe(Deficiency::Tritanopia),
        };
        let mut pairs = self.pairs();
        let score = self.score_from(&pairs, cvd_safe);
        pairs.sort_by(|p, q| p.delta_e.total_cmp(&q.delta_e));
        Report { score, pairs, previews }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_sorted_by_delta_e() {
        let p = Palette::new(["#000000", "#ffffff", "#111111", "#eeeeee"]);
        let r = p.report();
        assert!(r.pairs.windows(2).all(|w| w[0].delta_e <= w[1].delta_e));
        let worst = r.most_problematic().unwrap();
        assert_eq!((worst.index1, worst.index2), (0, 2));
        assert_eq!((r.pairs[1].index1, r.pairs[1].index2), (1, 3));
    }

    #[test]
    fn ties_keep_lexicographic_order() {
        let r = Palette::new(["#abcdef", "#abcdef", "#abcdef"]).report();
        let idx: Vec<_> = r.pairs.iter().map(|p| (p.index1, p.index2)).collect();
        assert_eq!(idx, [(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn attention_items() {
        let r = Palette::new(["#000000", "#ffffff", "#777777", "#787878"])
            .report();
        let items: Vec<_> = r.needs_attention()
            .map(|p| (p.index1, p.index2)).collect();
        assert_eq!(items, [(2, 3)]);
    }

    #[test]
    fn report_agrees_with_score() {
        let palettes: [&[&str]; 4] = [
            &[],
            &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"],
            &["#ff0000", "#00aa00"],
            &["#ff0000", "not-a-color"],
        ];
        for colors in palettes {
            let p = Palette::new(colors);
            let r = p.report();
            assert_eq!(r.score, p.score(), "{:?}", colors);
            for d in Deficiency::ALL {
                assert_eq!(r.preview(d).map(|v| v.safe),
                           Some(r.score.cvd_safe.get(d)));
            }
        }
    }

    #[test]
    fn previews() {
        let r = Palette::new(["#ff0000", "#00aa00", "oops"]).report();
        assert_eq!(r.previews.len(), 3);
        let d = r.preview(Deficiency::Deuteranopia).unwrap();
        assert_eq!(d.colors[0], "#a39000");
        assert_eq!(d.colors[2], "oops");
        assert!(!d.safe);
        assert_eq!(d.label(), "Warning");
        assert_eq!(d.min_delta_e, 0.);

        let r = Palette::new(["#000000", "#ffffff"]).report();
        for v in &r.previews {
            assert!(v.safe);
            assert_eq!(v.label(), "Safe");
            assert!(v.min_delta_e > 99.);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let r = Palette::new(["#000000", "#ffffff"]).report();
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["score"]["overall"], 100);
        assert_eq!(v["score"]["cvd_safe"]["tritanopia"], true);
        assert_eq!(v["pairs"][0]["wcag"], "AAA");
        assert_eq!(v["pairs"][0]["distinguishability"], "excellent");
        assert_eq!(v["previews"][1]["deficiency"], "deuteranopia");
        let back: Report = serde_json::from_value(v).unwrap();
        assert_eq!(back.score.overall, 100);
    }
}
