//! Write `report.html`, the accessibility report of the palette given
//! on the command line (or of a default one).
//!
//!     cargo run --example report -- '#1b9e77' '#d95f02' '#7570b3'

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use palette_a11y::{parse, text_color_for, PairAnalysis, Palette, Report};

type Err = Box<dyn Error>;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Unparseable entries get no background, only their (escaped) text.
fn swatch(fh: &mut impl Write, color: &str, width: u32) -> Result<(), Err> {
    let style = match parse(color) {
        Ok(c) => format!("background-color: {c}; color: {};",
                         text_color_for(&c)),
        Err(_) => String::new(),
    };
    writeln!(fh, "  <td style=\"width: {width}px; height: 30px; {style} \
                  text-align: center\">{}</td>",
             escape(color))?;
    Ok(())
}

fn table_of_colors<'a>(fh: &mut impl Write,
                       colors: impl Iterator<Item = &'a str>,
                       comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        swatch(fh, c, 80)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{}</td>\
                  </tr></table><br/>", escape(comment))?;
    Ok(())
}

fn pair_row(fh: &mut impl Write, p: &PairAnalysis) -> Result<(), Err> {
    writeln!(fh, "<tr>")?;
    swatch(fh, &p.color1, 80)?;
    swatch(fh, &p.color2, 80)?;
    writeln!(fh, "  <td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{}</td>\n\
                  </tr>",
             p.delta_e, p.contrast_ratio, p.wcag, p.distinguishability)?;
    Ok(())
}

fn summary(fh: &mut impl Write, r: &Report) -> Result<(), Err> {
    let s = &r.score;
    writeln!(fh, "<h3>Score: {}/100</h3>\n<ul>\n\
                  <li>ΔE: min {:.2}, average {:.2}</li>\n\
                  <li>Contrast: min {:.2}, average {:.2}</li>\n\
                  <li>Problematic pairs (ΔE &lt; 5): {}/{}</li>\n</ul>",
             s.overall, s.min_delta_e, s.avg_delta_e,
             s.min_contrast, s.avg_contrast,
             s.problematic_pairs, s.total_pairs)?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let palette = if args.is_empty() {
        Palette::new(["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728",
                      "#9467bd", "#8c564b"])
    } else {
        Palette::new(&args)
    };
    let report = palette.report();

    let mut fh = BufWriter::new(File::create("report.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Palette accessibility report</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Palette</h3>")?;
    table_of_colors(&mut fh, palette.iter(), "")?;
    summary(&mut fh, &report)?;

    writeln!(fh, "<h3>Color vision deficiencies</h3>")?;
    for v in &report.previews {
        let comment = format!("{}: {} (min ΔE {:.2})",
                              v.deficiency, v.label(), v.min_delta_e);
        table_of_colors(&mut fh, v.colors.iter().map(String::as_str),
                        &comment)?;
    }

    writeln!(fh, "<h3>Pairs needing attention (ΔE &lt; 10)</h3>")?;
    writeln!(fh, "<table>")?;
    for p in report.needs_attention() {
        pair_row(&mut fh, p)?;
    }
    writeln!(fh, "</table>")?;

    writeln!(fh, "<h3>All pairs</h3>")?;
    writeln!(fh, "<table>\n<tr><th colspan=\"2\"></th><th>ΔE</th>\
                  <th>Contrast</th><th>WCAG</th><th>Class</th></tr>")?;
    for p in &report.pairs {
        pair_row(&mut fh, p)?;
    }
    writeln!(fh, "</table>")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_escaped() {
        assert_eq!(escape("\"><script>&"), "&quot;&gt;&lt;script&gt;&amp;");
        let mut out = Vec::new();
        swatch(&mut out, "\"><script>", 80).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(!html.contains("<script>"), "{}", html);
        assert!(!html.contains("background-color"));
    }

    #[test]
    fn valid_swatch() {
        let mut out = Vec::new();
        swatch(&mut out, "#FFFFFF", 80).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("background-color: #ffffff; color: #000000;"),
                "{}", html);
        assert!(html.contains(">#FFFFFF</td>"));
    }
}
