//! 5×7 bitmap digits for point labels. Labels only ever contain the decimal
//! index of a point, so ten glyphs cover the whole alphabet.

use {
  crate::geometry::PixelSpace,
  euclid::Point2D,
  image::{Rgba, RgbaImage}
};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

// row bitmaps, bit 4 is the leftmost column
const DIGITS: [[u8; 7]; 10] = [
  [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
  [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
  [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
  [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
  [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
  [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
  [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
  [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
  [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
  [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

/// Stamp `text` centered on `center`, scaled so a glyph stands roughly
/// `size_px` tall. Characters other than decimal digits are dropped.
pub fn draw_text(
  image: &mut RgbaImage,
  center: Point2D<f32, PixelSpace>,
  text: &str,
  size_px: u32,
  color: Rgba<u8>
) {
  let scale = (size_px / GLYPH_HEIGHT).max(1);
  let advance = (GLYPH_WIDTH + 1) * scale;
  let glyphs = text.chars()
    .filter_map(|ch| ch.to_digit(10))
    .collect::<Vec<_>>();
  if glyphs.is_empty() {
    return;
  }
  let width = advance * glyphs.len() as u32 - scale;
  let height = GLYPH_HEIGHT * scale;
  let left = center.x - width as f32 / 2.0;
  let top = (center.y - height as f32 / 2.0).round() as i64;

  for (k, digit) in glyphs.iter().enumerate() {
    let rows = DIGITS[*digit as usize];
    let x0 = (left + (advance * k as u32) as f32).round() as i64;
    for (row, bits) in rows.iter().copied().enumerate() {
      for col in 0..GLYPH_WIDTH {
        if bits & (1u8 << (GLYPH_WIDTH - 1 - col)) == 0 {
          continue;
        }
        stamp(
          image,
          x0 + (col * scale) as i64,
          top + (row as u32 * scale) as i64,
          scale,
          color
        );
      }
    }
  }
}

fn stamp(image: &mut RgbaImage, x: i64, y: i64, size: u32, color: Rgba<u8>) {
  for dy in 0..size as i64 {
    for dx in 0..size as i64 {
      let (px, py) = (x + dx, y + dy);
      if px < 0 || py < 0 || px >= image.width() as i64 || py >= image.height() as i64 {
        continue;
      }
      image.put_pixel(px as u32, py as u32, color);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn stamps_inside_the_image() {
    let mut image = RgbaImage::new(64, 64);
    let white = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    draw_text(&mut image, Point2D::new(32.0, 32.0), "42", 14, white);
    assert!(image.pixels().any(|pixel| pixel == &white));
  }

  #[test] fn clips_at_the_border() {
    // must not panic when the label hangs off the canvas
    let mut image = RgbaImage::new(8, 8);
    let white = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
    draw_text(&mut image, Point2D::new(0.0, 0.0), "100", 28, white);
    draw_text(&mut image, Point2D::new(8.0, 8.0), "7", 28, white);
  }

  #[test] fn ignores_non_digits() {
    let mut image = RgbaImage::new(16, 16);
    let before = image.clone();
    draw_text(&mut image, Point2D::new(8.0, 8.0), "-", 7, Rgba([0xFF; 4]));
    assert_eq!(image.as_raw(), before.as_raw());
  }
}
