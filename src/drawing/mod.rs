#![allow(non_snake_case)]
//! Raster backend: an anti-aliased `Canvas` over `image::RgbaImage`.
//!
//! Shapes are rasterized from their signed distance functions, one bounding
//! box at a time, and composited with alpha blending at the edge.

use {
  crate::{
    canvas::Canvas,
    error::Result,
    geometry::{self, Disk, P2, PixelSpace, Ring, Shape, Stroke},
    palette::{self, Rgb},
    plot::{self, PlotOptions}
  },
  euclid::{Angle, Box2D, Point2D, Rotation2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  rand::Rng
};

mod font;
#[cfg(test)] mod tests;

// gray outline, orange markers; not configurable
const CIRCLE_COLOR: Rgba<u8> = Rgba([0x80, 0x80, 0x80, 0xFF]);
const POINT_COLOR: Rgba<u8> = Rgba([0xFF, 0xA5, 0x00, 0xFF]);

fn rgba(rgb: Rgb) -> Rgba<u8> {
  Rgba([rgb[0], rgb[1], rgb[2], 0xFF])
}

/// A square world viewport of half-extent `limit`, centered in the image
/// with the aspect ratio preserved, y up.
pub struct ImageCanvas {
  image: RgbaImage,
  limit: f32,
  text_color: Rgba<u8>,
  label_px: u32
}

impl ImageCanvas {
  pub fn new(
    width: u32,
    height: u32,
    limit: f32,
    background: Rgb,
    text: Rgb,
    label_px: u32
  ) -> Self {
    Self {
      image: RgbaImage::from_pixel(width, height, rgba(background)),
      limit,
      text_color: rgba(text),
      label_px
    }
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }

  /// Export the canvas; the format follows from the file extension.
  pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
    self.image.save(path)?;
    Ok(())
  }

  fn min_side(&self) -> f32 {
    self.image.width().min(self.image.height()) as f32
  }

  fn offset(&self) -> V2<f32, PixelSpace> {
    let resolution = V2::new(self.image.width() as f32, self.image.height() as f32);
    (resolution - V2::splat(self.min_side())) / 2.0
  }

  /// World units covered by one pixel.
  fn world_per_px(&self) -> f32 {
    2.0 * self.limit / self.min_side()
  }

  fn to_pixel(&self, p: P2) -> Point2D<f32, PixelSpace> {
    let c = p.to_vector() / (2.0 * self.limit);
    let min_side = self.min_side();
    Point2D::new((c.x + 0.5) * min_side, (0.5 - c.y) * min_side) + self.offset()
  }

  fn draw_shape(&mut self, shape: impl Shape, color: Rgba<u8>) {
    let bb = shape.bounding_box();
    // the y flip swaps which world corner maps to the top pixel row
    let min = self.to_pixel(Point2D::new(bb.min.x, bb.max.y));
    let max = self.to_pixel(Point2D::new(bb.max.x, bb.min.y));
    let screen = Box2D::from_size(Size2D::new(
      self.image.width() as f32,
      self.image.height() as f32
    ));
    let bb = match Box2D::new(min, max).round_out().intersection(&screen) {
      Some(x) => x.to_u32(),
      None => return // bounding box has no intersection with screen at all
    };

    let Δp = self.world_per_px();
    let (min_side, offset, limit) = (self.min_side(), self.offset(), self.limit);
    itertools::iproduct!(bb.y_range(), bb.x_range())
      .for_each(|(y, x)| {
        let world: P2 = Point2D::new(
          ((x as f32 + 0.5 - offset.x) / min_side - 0.5) * 2.0 * limit,
          (0.5 - (y as f32 + 0.5 - offset.y) / min_side) * 2.0 * limit
        );
        let sdf = shape.sdf(world);
        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, color);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}

impl Canvas for ImageCanvas {
  fn draw_circle(&mut self, center: P2, radius: f32) {
    let width = 1.5 * self.world_per_px();
    self.draw_shape(Ring { xy: center, r: radius, width }, CIRCLE_COLOR);
  }

  fn draw_point(&mut self, at: P2) {
    let r = 0.012 * 2.0 * self.limit;
    self.draw_shape(Disk { xy: at, r }, POINT_COLOR);
  }

  fn draw_label(&mut self, anchor: P2, text: &str) {
    let anchor = self.to_pixel(anchor);
    let (label_px, color) = (self.label_px, self.text_color);
    font::draw_text(&mut self.image, anchor, text, label_px, color);
  }

  fn draw_arc(&mut self, from: P2, to: P2, color: Rgb) {
    let color = rgba(color);
    let width = 1.5 * self.world_per_px();
    self.draw_shape(Stroke { a: from, b: to, width }, color);
    // "->" head: two barbs splayed off the shaft at the destination
    if let Some(back) = (from - to).try_normalize() {
      let length = 8.0 * self.world_per_px();
      for angle in [-0.5f32, 0.5] {
        let barb = Rotation2D::new(Angle::radians(angle)).transform_vector(back) * length;
        self.draw_shape(Stroke { a: to + barb, b: to, width }, color);
      }
    }
  }
}

/// Render a full modulus-circle plot into an image buffer, sizing the
/// viewport and labels from the modulus.
pub fn render(
  options: &PlotOptions,
  width: u32,
  height: u32,
  rng: &mut impl Rng
) -> Result<RgbaImage> {
  let background = palette::resolve(&options.background_color)?;
  let text = palette::resolve(&options.text_color)?;
  let mut canvas = ImageCanvas::new(
    width,
    height,
    geometry::plot_limit(options.modulus),
    background,
    text,
    geometry::label_size(options.modulus)
  );
  plot::plot_modulus_circle(options, rng, &mut canvas)?;
  Ok(canvas.into_image())
}
