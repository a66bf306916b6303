//! Ordered palettes and their pairwise analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{
    RGBColor,
    color::{Color, Lab},
    contrast::{ratio, relative_luminance, WcagLevel},
    cvd::{simulate, Deficiency},
    delta_e::{ciede2000, Distinguishability},
    parse::parse,
};

/// An ordered list of colors, as given by the caller.
///
/// Each entry keeps the string it was created from together with the
/// parsed color, if any.  Entries that cannot be parsed are kept (they
/// are scored as indistinguishable from every other color).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    raw: String,
    color: Option<Color>,
}

impl Entry {
    fn new(raw: &str) -> Self {
        Entry { raw: raw.to_string(), color: parse(raw).ok() }
    }

    fn from_color(c: Color) -> Self {
        // Go through 8 bits so that the stored color is the one its
        // hex string denotes.
        let c = Color::from(c.to_rgb8());
        Entry { raw: c.to_hex(), color: Some(c) }
    }
}

/// Analysis of the unordered pair of colors at `index1 < index2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairAnalysis {
    pub index1: usize,
    pub index2: usize,
    pub color1: String,
    pub color2: String,
    /// CIEDE2000 difference, `0.` if a color is invalid.
    pub delta_e: f64,
    /// WCAG contrast ratio, `0.` if a color is invalid.
    pub contrast_ratio: f64,
    /// Level reached by `contrast_ratio` for normal text.
    pub wcag: WcagLevel,
    pub distinguishability: Distinguishability,
}

impl PairAnalysis {
    /// Whether the pair needs attention (ΔE < 10).
    pub fn needs_attention(&self) -> bool {
        !matches!(self.distinguishability, Distinguishability::Excellent)
    }
}

impl Palette {
    /// Create a palette from color strings.
    ///
    /// ```
    /// use palette_a11y::Palette;
    /// let p = Palette::new(["#000000", "#ffffff", "nope"]);
    /// assert_eq!(p.len(), 3);
    /// assert_eq!(p.invalid_indices(), vec![2]);
    /// ```
    pub fn new<I, S>(colors: I) -> Self
    where I: IntoIterator<Item = S>, S: AsRef<str> {
        Palette { entries: colors.into_iter()
                  .map(|c| Entry::new(c.as_ref())).collect() }
    }

    /// Create a palette from colors of any [`RGBColor`] type.  The
    /// colors are rounded to 8 bits per channel.
    pub fn from_colors<I, C>(colors: I) -> Self
    where I: IntoIterator<Item = C>, C: RGBColor {
        Palette { entries: colors.into_iter()
                  .map(|c| Entry::from_color(c.to_color())).collect() }
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns the `i`th color string, as given.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(|e| e.raw.as_str())
    }

    /// Returns the `i`th color if it exists and could be parsed.
    pub fn color(&self, i: usize) -> Option<Color> {
        self.entries.get(i).and_then(|e| e.color)
    }

    /// Iterate on the color strings, in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.raw.as_str())
    }

    /// Indices of the entries that could not be parsed.
    pub fn invalid_indices(&self) -> Vec<usize> {
        self.entries.iter().enumerate()
            .filter(|(_, e)| e.color.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Return the palette as seen with the deficiency `d`.  Simulated
    /// colors are rounded to `#rrggbb`; entries that could not be
    /// parsed are kept as they are.
    pub fn simulate(&self, d: Deficiency) -> Palette {
        let entries = self.entries.iter().map(|e| match e.color {
            Some(c) => Entry::from_color(simulate(&c, d)),
            None => e.clone(),
        }).collect();
        Palette { entries }
    }

    /// Analyse all pairs `(i, j)` with `i < j`, in lexicographic order.
    ///
    /// ```
    /// use palette_a11y::Palette;
    /// let pairs = Palette::new(["#ff0000", "#00ff00", "#0000ff"]).pairs();
    /// let idx: Vec<_> = pairs.iter().map(|p| (p.index1, p.index2)).collect();
    /// assert_eq!(idx, [(0, 1), (0, 2), (1, 2)]);
    /// ```
    pub fn pairs(&self) -> Vec<PairAnalysis> {
        let metrics: Vec<Option<(Lab, f64)>> = self.entries.iter()
            .map(|e| e.color.map(|c| (c.to_lab(), relative_luminance(&c))))
            .collect();
        let n = self.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0 .. n {
            for j in i + 1 .. n {
                let (delta_e, contrast_ratio) = match (&metrics[i], &metrics[j]) {
                    (Some((lab1, l1)), Some((lab2, l2))) =>
                        (ciede2000(lab1, lab2), ratio(*l1, *l2)),
                    _ => (0., 0.),
                };
                pairs.push(PairAnalysis {
                    index1: i,
                    index2: j,
                    color1: self.entries[i].raw.clone(),
                    color2: self.entries[j].raw.clone(),
                    delta_e,
                    contrast_ratio,
                    wcag: WcagLevel::from_ratio(contrast_ratio, false),
                    distinguishability:
                        Distinguishability::from_delta_e(delta_e),
                });
            }
        }
        pairs
    }
}

impl<S: AsRef<str>> FromIterator<S> for Palette {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Palette::new(iter)
    }
}

/// Analyse all pairs of colors of `palette`.  See [`Palette::pairs`].
pub fn analyze_pairs<S: AsRef<str>>(palette: &[S]) -> Vec<PairAnalysis> {
    Palette::new(palette).pairs()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::contrast::contrast_ratio_str;
    use crate::delta_e::delta_e_str;

    #[test]
    fn pair_count() {
        let colors = ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff",
                      "#ffff00", "#00ffff", "#ff00ff"];
        for n in 0 ..= colors.len() {
            let expected = if n < 2 { 0 } else { n * (n - 1) / 2 };
            assert_eq!(analyze_pairs(&colors[.. n]).len(), expected);
        }
    }

    #[test]
    fn lexicographic_order() {
        let pairs = analyze_pairs(&["#111111", "#555555", "#999999", "#dddddd"]);
        let idx: Vec<_> = pairs.iter().map(|p| (p.index1, p.index2)).collect();
        assert_eq!(idx, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(pairs[4].color1, "#555555");
        assert_eq!(pairs[4].color2, "#dddddd");
    }

    #[test]
    fn black_and_white() {
        let pairs = analyze_pairs(&["#000000", "#ffffff"]);
        let p = &pairs[0];
        assert!((p.contrast_ratio - 21.).abs() < 1e-9);
        assert!((p.delta_e - 100.).abs() < 0.01);
        assert_eq!(p.wcag, WcagLevel::AAA);
        assert_eq!(p.distinguishability, Distinguishability::Excellent);
        assert!(!p.needs_attention());
    }

    #[test]
    fn identical_colors() {
        let p = &analyze_pairs(&["#ff0000", "#FF0000"])[0];
        assert_eq!(p.delta_e, 0.);
        assert_eq!(p.contrast_ratio, 1.);
        assert_eq!(p.wcag, WcagLevel::Fail);
        assert_eq!(p.distinguishability, Distinguishability::Indistinguishable);
        assert_eq!(p.color2, "#FF0000");
    }

    #[test]
    fn unparseable_entry() {
        let p = &analyze_pairs(&["#ff0000", "not-a-color"])[0];
        assert_eq!(p.delta_e, 0.);
        assert_eq!(p.contrast_ratio, 0.);
        assert_eq!(p.wcag, WcagLevel::Fail);
        assert_eq!(p.distinguishability, Distinguishability::Indistinguishable);
    }

    #[test]
    fn agrees_with_engines() {
        let colors = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];
        for p in analyze_pairs(&colors) {
            let de = delta_e_str(&p.color1, &p.color2);
            let cr = contrast_ratio_str(&p.color1, &p.color2);
            assert!((p.delta_e - de).abs() < 1e-12);
            assert!((p.contrast_ratio - cr).abs() < 1e-12);
        }
    }

    #[test]
    fn simulate_keeps_invalid_entries() {
        let p = Palette::new(["#ff0000", "bad", "#ffffff"]);
        let s = p.simulate(Deficiency::Deuteranopia);
        assert_eq!(s.iter().collect::<Vec<_>>(), ["#a39000", "bad", "#ffffff"]);
        assert_eq!(s.invalid_indices(), vec![1]);
    }

    #[test]
    fn from_rgb_colors() {
        let p = Palette::from_colors([RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)]);
        assert_eq!(p.get(0), Some("#ff0000"));
        assert_eq!(p.get(1), Some("#0000ff"));
        assert_eq!(p.get(2), None);
        let q: Palette = ["#ff0000", "#0000ff"].into_iter().collect();
        assert_eq!(p, q);
    }
}
