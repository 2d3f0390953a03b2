//! Arc color selection.
//!
//! Arcs are colored from a fixed table of named colors (the CSS extended
//! keywords), filtered to a mid-range perceived-luminance band so they stay
//! visible against a near-black or near-white background.

use crate::error::{Error, Result};

/// sRGB triple, 8 bits per channel.
pub type Rgb = [u8; 3];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NamedColor {
  pub name: &'static str,
  pub rgb: Rgb
}

/// Default luminance band `(low, high)` for arc colors.
pub const LUMINANCE_BAND: (f32, f32) = (0.3, 0.7);

const fn c(name: &'static str, rgb: Rgb) -> NamedColor {
  NamedColor { name, rgb }
}

/// The CSS extended color keywords, in table order.
/// `grey`/`gray` spellings are distinct names sharing a value.
pub const NAMED_COLORS: &[NamedColor] = &[
  c("aliceblue", [0xF0, 0xF8, 0xFF]),
  c("antiquewhite", [0xFA, 0xEB, 0xD7]),
  c("aqua", [0x00, 0xFF, 0xFF]),
  c("aquamarine", [0x7F, 0xFF, 0xD4]),
  c("azure", [0xF0, 0xFF, 0xFF]),
  c("beige", [0xF5, 0xF5, 0xDC]),
  c("bisque", [0xFF, 0xE4, 0xC4]),
  c("black", [0x00, 0x00, 0x00]),
  c("blanchedalmond", [0xFF, 0xEB, 0xCD]),
  c("blue", [0x00, 0x00, 0xFF]),
  c("blueviolet", [0x8A, 0x2B, 0xE2]),
  c("brown", [0xA5, 0x2A, 0x2A]),
  c("burlywood", [0xDE, 0xB8, 0x87]),
  c("cadetblue", [0x5F, 0x9E, 0xA0]),
  c("chartreuse", [0x7F, 0xFF, 0x00]),
  c("chocolate", [0xD2, 0x69, 0x1E]),
  c("coral", [0xFF, 0x7F, 0x50]),
  c("cornflowerblue", [0x64, 0x95, 0xED]),
  c("cornsilk", [0xFF, 0xF8, 0xDC]),
  c("crimson", [0xDC, 0x14, 0x3C]),
  c("cyan", [0x00, 0xFF, 0xFF]),
  c("darkblue", [0x00, 0x00, 0x8B]),
  c("darkcyan", [0x00, 0x8B, 0x8B]),
  c("darkgoldenrod", [0xB8, 0x86, 0x0B]),
  c("darkgray", [0xA9, 0xA9, 0xA9]),
  c("darkgreen", [0x00, 0x64, 0x00]),
  c("darkgrey", [0xA9, 0xA9, 0xA9]),
  c("darkkhaki", [0xBD, 0xB7, 0x6B]),
  c("darkmagenta", [0x8B, 0x00, 0x8B]),
  c("darkolivegreen", [0x55, 0x6B, 0x2F]),
  c("darkorange", [0xFF, 0x8C, 0x00]),
  c("darkorchid", [0x99, 0x32, 0xCC]),
  c("darkred", [0x8B, 0x00, 0x00]),
  c("darksalmon", [0xE9, 0x96, 0x7A]),
  c("darkseagreen", [0x8F, 0xBC, 0x8F]),
  c("darkslateblue", [0x48, 0x3D, 0x8B]),
  c("darkslategray", [0x2F, 0x4F, 0x4F]),
  c("darkslategrey", [0x2F, 0x4F, 0x4F]),
  c("darkturquoise", [0x00, 0xCE, 0xD1]),
  c("darkviolet", [0x94, 0x00, 0xD3]),
  c("deeppink", [0xFF, 0x14, 0x93]),
  c("deepskyblue", [0x00, 0xBF, 0xFF]),
  c("dimgray", [0x69, 0x69, 0x69]),
  c("dimgrey", [0x69, 0x69, 0x69]),
  c("dodgerblue", [0x1E, 0x90, 0xFF]),
  c("firebrick", [0xB2, 0x22, 0x22]),
  c("floralwhite", [0xFF, 0xFA, 0xF0]),
  c("forestgreen", [0x22, 0x8B, 0x22]),
  c("fuchsia", [0xFF, 0x00, 0xFF]),
  c("gainsboro", [0xDC, 0xDC, 0xDC]),
  c("ghostwhite", [0xF8, 0xF8, 0xFF]),
  c("gold", [0xFF, 0xD7, 0x00]),
  c("goldenrod", [0xDA, 0xA5, 0x20]),
  c("gray", [0x80, 0x80, 0x80]),
  c("green", [0x00, 0x80, 0x00]),
  c("greenyellow", [0xAD, 0xFF, 0x2F]),
  c("grey", [0x80, 0x80, 0x80]),
  c("honeydew", [0xF0, 0xFF, 0xF0]),
  c("hotpink", [0xFF, 0x69, 0xB4]),
  c("indianred", [0xCD, 0x5C, 0x5C]),
  c("indigo", [0x4B, 0x00, 0x82]),
  c("ivory", [0xFF, 0xFF, 0xF0]),
  c("khaki", [0xF0, 0xE6, 0x8C]),
  c("lavender", [0xE6, 0xE6, 0xFA]),
  c("lavenderblush", [0xFF, 0xF0, 0xF5]),
  c("lawngreen", [0x7C, 0xFC, 0x00]),
  c("lemonchiffon", [0xFF, 0xFA, 0xCD]),
  c("lightblue", [0xAD, 0xD8, 0xE6]),
  c("lightcoral", [0xF0, 0x80, 0x80]),
  c("lightcyan", [0xE0, 0xFF, 0xFF]),
  c("lightgoldenrodyellow", [0xFA, 0xFA, 0xD2]),
  c("lightgray", [0xD3, 0xD3, 0xD3]),
  c("lightgreen", [0x90, 0xEE, 0x90]),
  c("lightgrey", [0xD3, 0xD3, 0xD3]),
  c("lightpink", [0xFF, 0xB6, 0xC1]),
  c("lightsalmon", [0xFF, 0xA0, 0x7A]),
  c("lightseagreen", [0x20, 0xB2, 0xAA]),
  c("lightskyblue", [0x87, 0xCE, 0xFA]),
  c("lightslategray", [0x77, 0x88, 0x99]),
  c("lightslategrey", [0x77, 0x88, 0x99]),
  c("lightsteelblue", [0xB0, 0xC4, 0xDE]),
  c("lightyellow", [0xFF, 0xFF, 0xE0]),
  c("lime", [0x00, 0xFF, 0x00]),
  c("limegreen", [0x32, 0xCD, 0x32]),
  c("linen", [0xFA, 0xF0, 0xE6]),
  c("magenta", [0xFF, 0x00, 0xFF]),
  c("maroon", [0x80, 0x00, 0x00]),
  c("mediumaquamarine", [0x66, 0xCD, 0xAA]),
  c("mediumblue", [0x00, 0x00, 0xCD]),
  c("mediumorchid", [0xBA, 0x55, 0xD3]),
  c("mediumpurple", [0x93, 0x70, 0xDB]),
  c("mediumseagreen", [0x3C, 0xB3, 0x71]),
  c("mediumslateblue", [0x7B, 0x68, 0xEE]),
  c("mediumspringgreen", [0x00, 0xFA, 0x9A]),
  c("mediumturquoise", [0x48, 0xD1, 0xCC]),
  c("mediumvioletred", [0xC7, 0x15, 0x85]),
  c("midnightblue", [0x19, 0x19, 0x70]),
  c("mintcream", [0xF5, 0xFF, 0xFA]),
  c("mistyrose", [0xFF, 0xE4, 0xE1]),
  c("moccasin", [0xFF, 0xE4, 0xB5]),
  c("navajowhite", [0xFF, 0xDE, 0xAD]),
  c("navy", [0x00, 0x00, 0x80]),
  c("oldlace", [0xFD, 0xF5, 0xE6]),
  c("olive", [0x80, 0x80, 0x00]),
  c("olivedrab", [0x6B, 0x8E, 0x23]),
  c("orange", [0xFF, 0xA5, 0x00]),
  c("orangered", [0xFF, 0x45, 0x00]),
  c("orchid", [0xDA, 0x70, 0xD6]),
  c("palegoldenrod", [0xEE, 0xE8, 0xAA]),
  c("palegreen", [0x98, 0xFB, 0x98]),
  c("paleturquoise", [0xAF, 0xEE, 0xEE]),
  c("palevioletred", [0xDB, 0x70, 0x93]),
  c("papayawhip", [0xFF, 0xEF, 0xD5]),
  c("peachpuff", [0xFF, 0xDA, 0xB9]),
  c("peru", [0xCD, 0x85, 0x3F]),
  c("pink", [0xFF, 0xC0, 0xCB]),
  c("plum", [0xDD, 0xA0, 0xDD]),
  c("powderblue", [0xB0, 0xE0, 0xE6]),
  c("purple", [0x80, 0x00, 0x80]),
  c("red", [0xFF, 0x00, 0x00]),
  c("rosybrown", [0xBC, 0x8F, 0x8F]),
  c("royalblue", [0x41, 0x69, 0xE1]),
  c("saddlebrown", [0x8B, 0x45, 0x13]),
  c("salmon", [0xFA, 0x80, 0x72]),
  c("sandybrown", [0xF4, 0xA4, 0x60]),
  c("seagreen", [0x2E, 0x8B, 0x57]),
  c("seashell", [0xFF, 0xF5, 0xEE]),
  c("sienna", [0xA0, 0x52, 0x2D]),
  c("silver", [0xC0, 0xC0, 0xC0]),
  c("skyblue", [0x87, 0xCE, 0xEB]),
  c("slateblue", [0x6A, 0x5A, 0xCD]),
  c("slategray", [0x70, 0x80, 0x90]),
  c("slategrey", [0x70, 0x80, 0x90]),
  c("snow", [0xFF, 0xFA, 0xFA]),
  c("springgreen", [0x00, 0xFF, 0x7F]),
  c("steelblue", [0x46, 0x82, 0xB4]),
  c("tan", [0xD2, 0xB4, 0x8C]),
  c("teal", [0x00, 0x80, 0x80]),
  c("thistle", [0xD8, 0xBF, 0xD8]),
  c("tomato", [0xFF, 0x63, 0x47]),
  c("turquoise", [0x40, 0xE0, 0xD0]),
  c("violet", [0xEE, 0x82, 0xEE]),
  c("wheat", [0xF5, 0xDE, 0xB3]),
  c("white", [0xFF, 0xFF, 0xFF]),
  c("whitesmoke", [0xF5, 0xF5, 0xF5]),
  c("yellow", [0xFF, 0xFF, 0x00]),
  c("yellowgreen", [0x9A, 0xCD, 0x32]),
];

/// Look a color name up in the table.
pub fn resolve(name: &str) -> Result<Rgb> {
  NAMED_COLORS.iter()
    .find(|color| color.name == name)
    .map(|color| color.rgb)
    .ok_or_else(|| Error::InvalidColorName(name.to_string()))
}

/// Perceived brightness, ITU-R BT.709 weights over normalized components.
/// Applied to the gamma-encoded values directly, matching the band the
/// thresholds were tuned against; this is not WCAG relative luminance.
pub fn luminance(rgb: Rgb) -> f32 {
  let [r, g, b] = rgb.map(|channel| channel as f32 / 255.0);
  0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Keep the colors whose luminance falls in `[low, high]`, preserving input
/// order. Fails on the first name that does not resolve.
pub fn filter_colors<'a>(
  names: impl IntoIterator<Item = &'a str>,
  low: f32,
  high: f32
) -> Result<Vec<&'a str>> {
  let mut filtered = vec![];
  for name in names {
    let luma = luminance(resolve(name)?);
    if (low..=high).contains(&luma) {
      filtered.push(name);
    }
  }
  Ok(filtered)
}

/// The full arc palette: every named color except the background and text
/// colors, restricted to the default luminance band.
pub fn arc_palette(background: &str, text: &str) -> Result<Vec<NamedColor>> {
  resolve(background)?;
  resolve(text)?;
  let (low, high) = LUMINANCE_BAND;
  let palette = NAMED_COLORS.iter()
    .filter(|color| color.name != background && color.name != text)
    .filter(|color| (low..=high).contains(&luminance(color.rgb)))
    .copied()
    .collect::<Vec<_>>();
  if palette.is_empty() {
    return Err(Error::EmptyPalette);
  }
  Ok(palette)
}
