//! Parsing of CSS-like color strings.

use std::{collections::HashMap, fmt, str::FromStr};
use lazy_static::lazy_static;
use crate::color::{Color, Hsl};

/// Reason why a string could not be read as a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    /// A `#` form whose number of digits is neither 3 nor 6.
    InvalidLength,
    InvalidHex,
    /// A malformed `rgb(…)` or `hsl(…)` expression.
    InvalidFunction,
    OutOfRange,
    UnknownName(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            Empty => f.write_str("empty color string"),
            InvalidLength => f.write_str("hex color must have 3 or 6 digits"),
            InvalidHex => f.write_str("invalid hex digits"),
            InvalidFunction => f.write_str("invalid rgb() or hsl() function"),
            OutOfRange => f.write_str("color component out of range"),
            UnknownName(s) => write!(f, "unknown color name “{}”", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a color string.
///
/// The accepted forms (case insensitive, surrounding blanks ignored) are
/// `#rrggbb`, `#rgb`, `rgb(r, g, b)` with components in \[0, 255\] or
/// percentages, `hsl(h, s%, l%)` and the CSS named colors.  Forms with
/// an alpha channel are rejected.
///
/// # Example
///
/// ```
/// use palette_a11y::{parse, ParseError};
/// assert_eq!(parse("#FF0000").unwrap().to_hex(), "#ff0000");
/// assert_eq!(parse("rebeccapurple").unwrap().to_hex(), "#663399");
/// assert_eq!(parse("#ff000080"), Err(ParseError::InvalidLength));
/// ```
pub fn parse(s: &str) -> Result<Color, ParseError> {
    let s = s.trim().to_ascii_lowercase();
    if s.is_empty() { return Err(ParseError::Empty) }
    if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = function_args(&s, "rgb") {
        parse_rgb_function(args)
    } else if let Some(args) = function_args(&s, "hsl") {
        parse_hsl_function(args)
    } else {
        match NAMED_COLORS.get(s.as_str()) {
            Some(&[r, g, b]) => Ok(Color::from_rgb8(r, g, b)),
            None => Err(ParseError::UnknownName(s)),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse(s) }
}

fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    use ParseError::*;
    let digits: Vec<u8> = hex.chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(InvalidHex))
        .collect::<Result<_, _>>()?;
    match digits[..] {
        [r, g, b] => Ok(Color::from_rgb8(17 * r, 17 * g, 17 * b)),
        [r1, r0, g1, g0, b1, b0] =>
            Ok(Color::from_rgb8(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        _ => Err(InvalidLength),
    }
}

/// If `s` reads `name(…)`, return the text between the parentheses.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.trim_start().strip_prefix('(')?.strip_suffix(')')
}

/// Split the arguments on commas or, for the modern syntax, on blanks.
fn components(args: &str) -> Result<[&str; 3], ParseError> {
    let parts: Vec<&str> = {
        if args.contains(',') { args.split(',').map(str::trim).collect() }
        else { args.split_whitespace().collect() } };
    match parts[..] {
        [a, b, c] if !a.is_empty() && !b.is_empty() && !c.is_empty() =>
            Ok([a, b, c]),
        _ => Err(ParseError::InvalidFunction),
    }
}

fn number(s: &str) -> Result<f64, ParseError> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ParseError::InvalidFunction),
    }
}

fn in_range(x: f64, max: f64) -> Result<f64, ParseError> {
    if (0. ..= max).contains(&x) { Ok(x) } else { Err(ParseError::OutOfRange) }
}

fn parse_rgb_function(args: &str) -> Result<Color, ParseError> {
    let channel = |c: &str| -> Result<u8, ParseError> {
        let v = match c.strip_suffix('%') {
            Some(p) => in_range(number(p)?, 100.)? * 255. / 100.,
            None => in_range(number(c)?, 255.)?,
        };
        Ok(v.round() as u8)
    };
    let [r, g, b] = components(args)?;
    Ok(Color::from_rgb8(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_hsl_function(args: &str) -> Result<Color, ParseError> {
    let [h, s, l] = components(args)?;
    let h = number(h.strip_suffix("deg").unwrap_or(h))?;
    let percent = |c: &str| in_range(number(c.strip_suffix('%').unwrap_or(c))?,
                                     100.);
    Ok(Color::Hsl(Hsl::new(h.rem_euclid(360.), percent(s)?, percent(l)?)))
}

lazy_static! {
    /// The CSS Color Module Level 4 named colors.
    static ref NAMED_COLORS: HashMap<&'static str, [u8; 3]> = [
        ("aliceblue", [240, 248, 255]), ("antiquewhite", [250, 235, 215]),
        ("aqua", [0, 255, 255]), ("aquamarine", [127, 255, 212]),
        ("azure", [240, 255, 255]), ("beige", [245, 245, 220]),
        ("bisque", [255, 228, 196]), ("black", [0, 0, 0]),
        ("blanchedalmond", [255, 235, 205]), ("blue", [0, 0, 255]),
        ("blueviolet", [138, 43, 226]), ("brown", [165, 42, 42]),
        ("burlywood", [222, 184, 135]), ("cadetblue", [95, 158, 160]),
        ("chartreuse", [127, 255, 0]), ("chocolate", [210, 105, 30]),
        ("coral", [255, 127, 80]), ("cornflowerblue", [100, 149, 237]),
        ("cornsilk", [255, 248, 220]), ("crimson", [220, 20, 60]),
        ("cyan", [0, 255, 255]), ("darkblue", [0, 0, 139]),
        ("darkcyan", [0, 139, 139]), ("darkgoldenrod", [184, 134, 11]),
        ("darkgray", [169, 169, 169]), ("darkgreen", [0, 100, 0]),
        ("darkgrey", [169, 169, 169]), ("darkkhaki", [189, 183, 107]),
        ("darkmagenta", [139, 0, 139]), ("darkolivegreen", [85, 107, 47]),
        ("darkorange", [255, 140, 0]), ("darkorchid", [153, 50, 204]),
        ("darkred", [139, 0, 0]), ("darksalmon", [233, 150, 122]),
        ("darkseagreen", [143, 188, 143]), ("darkslateblue", [72, 61, 139]),
        ("darkslategray", [47, 79, 79]), ("darkslategrey", [47, 79, 79]),
        ("darkturquoise", [0, 206, 209]), ("darkviolet", [148, 0, 211]),
        ("deeppink", [255, 20, 147]), ("deepskyblue", [0, 191, 255]),
        ("dimgray", [105, 105, 105]), ("dimgrey", [105, 105, 105]),
        ("dodgerblue", [30, 144, 255]), ("firebrick", [178, 34, 34]),
        ("floralwhite", [255, 250, 240]), ("forestgreen", [34, 139, 34]),
        ("fuchsia", [255, 0, 255]), ("gainsboro", [220, 220, 220]),
        ("ghostwhite", [248, 248, 255]), ("gold", [255, 215, 0]),
        ("goldenrod", [218, 165, 32]), ("gray", [128, 128, 128]),
        ("green", [0, 128, 0]), ("greenyellow", [173, 255, 47]),
        ("grey", [128, 128, 128]), ("honeydew", [240, 255, 240]),
        ("hotpink", [255, 105, 180]), ("indianred", [205, 92, 92]),
        ("indigo", [75, 0, 130]), ("ivory", [255, 255, 240]),
        ("khaki", [240, 230, 140]), ("lavender", [230, 230, 250]),
        ("lavenderblush", [255, 240, 245]), ("lawngreen", [124, 252, 0]),
        ("lemonchiffon", [255, 250, 205]), ("lightblue", [173, 216, 230]),
        ("lightcoral", [240, 128, 128]), ("lightcyan", [224, 255, 255]),
        ("lightgoldenrodyellow", [250, 250, 210]),
        ("lightgray", [211, 211, 211]), ("lightgreen", [144, 238, 144]),
        ("lightgrey", [211, 211, 211]), ("lightpink", [255, 182, 193]),
        ("lightsalmon", [255, 160, 122]), ("lightseagreen", [32, 178, 170]),
        ("lightskyblue", [135, 206, 250]),
        ("lightslategray", [119, 136, 153]),
        ("lightslategrey", [119, 136, 153]),
        ("lightsteelblue", [176, 196, 222]), ("lightyellow", [255, 255, 224]),
        ("lime", [0, 255, 0]), ("limegreen", [50, 205, 50]),
        ("linen", [250, 240, 230]), ("magenta", [255, 0, 255]),
        ("maroon", [128, 0, 0]), ("mediumaquamarine", [102, 205, 170]),
        ("mediumblue", [0, 0, 205]), ("mediumorchid", [186, 85, 211]),
        ("mediumpurple", [147, 112, 219]),
        ("mediumseagreen", [60, 179, 113]),
        ("mediumslateblue", [123, 104, 238]),
        ("mediumspringgreen", [0, 250, 154]),
        ("mediumturquoise", [72, 209, 204]),
        ("mediumvioletred", [199, 21, 133]),
        ("midnightblue", [25, 25, 112]), ("mintcream", [245, 255, 250]),
        ("mistyrose", [255, 228, 225]), ("moccasin", [255, 228, 181]),
        ("navajowhite", [255, 222, 173]), ("navy", [0, 0, 128]),
        ("oldlace", [253, 245, 230]), ("olive", [128, 128, 0]),
        ("olivedrab", [107, 142, 35]), ("orange", [255, 165, 0]),
        ("orangered", [255, 69, 0]), ("orchid", [218, 112, 214]),
        ("palegoldenrod", [238, 232, 170]), ("palegreen", [152, 251, 152]),
        ("paleturquoise", [175, 238, 238]),
        ("palevioletred", [219, 112, 147]), ("papayawhip", [255, 239, 213]),
        ("peachpuff", [255, 218, 185]), ("peru", [205, 133, 63]),
        ("pink", [255, 192, 203]), ("plum", [221, 160, 221]),
        ("powderblue", [176, 224, 230]), ("purple", [128, 0, 128]),
        ("rebeccapurple", [102, 51, 153]), ("red", [255, 0, 0]),
        ("rosybrown", [188, 143, 143]), ("royalblue", [65, 105, 225]),
        ("saddlebrown", [139, 69, 19]), ("salmon", [250, 128, 114]),
        ("sandybrown", [244, 164, 96]), ("seagreen", [46, 139, 87]),
        ("seashell", [255, 245, 238]), ("sienna", [160, 82, 45]),
        ("silver", [192, 192, 192]), ("skyblue", [135, 206, 235]),
        ("slateblue", [106, 90, 205]), ("slategray", [112, 128, 144]),
        ("slategrey", [112, 128, 144]), ("snow", [255, 250, 250]),
        ("springgreen", [0, 255, 127]), ("steelblue", [70, 130, 180]),
        ("tan", [210, 180, 140]), ("teal", [0, 128, 128]),
        ("thistle", [216, 191, 216]), ("tomato", [255, 99, 71]),
        ("turquoise", [64, 224, 208]), ("violet", [238, 130, 238]),
        ("wheat", [245, 222, 179]), ("white", [255, 255, 255]),
        ("whitesmoke", [245, 245, 245]), ("yellow", [255, 255, 0]),
        ("yellowgreen", [154, 205, 50]),
    ].into_iter().collect();
}
