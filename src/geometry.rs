//! Circle layout and the shapes the raster backend draws with.
//!
//! Plot coordinates put the origin at the circle center with y pointing up;
//! the drawing backend owns the flip into pixel rows.

use {
  crate::error::{Error, Result},
  euclid::{Angle, Box2D, Point2D, Vector2D as V2}
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Plot coordinate basis: origin at the circle center, y up
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2 = Point2D<f32, WorldSpace>;

/// Radius of the point circle, grown with the modulus so dense plots keep
/// their points apart.
pub fn scale_factor(modulus: u64) -> f32 {
  (modulus as f32 / 20.0).max(1.0)
}

/// Half-extent of the viewport around the circle.
pub fn plot_limit(modulus: u64) -> f32 {
  scale_factor(modulus) * 1.5
}

/// Label height in pixels, shrinking as points get denser.
pub fn label_size(modulus: u64) -> u32 {
  (30 - modulus as i64 / 3).max(12) as u32
}

/// Angular coordinate of a 1-based point index. Point layout starts at
/// `offset_angle` degrees (minus one slot, so that point 1 lands exactly on
/// the offset) and walks clockwise or counterclockwise around the circle.
pub fn point_angle(
  index: u64,
  modulus: u64,
  clockwise: bool,
  offset_angle: f32
) -> Result<Angle<f32>> {
  if modulus == 0 {
    return Err(Error::InvalidParameter("modulus must be positive".into()));
  }
  if !(1..=modulus).contains(&index) {
    return Err(Error::InvalidParameter(format!(
      "point index {} outside [1, {}]", index, modulus
    )));
  }
  let offset = Angle::degrees(offset_angle - 360.0 / modulus as f32);
  let turn = Angle::radians(std::f32::consts::TAU * (index - 1) as f32 / modulus as f32);
  Ok(if clockwise { offset - turn } else { turn - offset })
}

/// Cartesian position of a 1-based point index on the circle.
pub fn point_position(
  index: u64,
  modulus: u64,
  clockwise: bool,
  offset_angle: f32
) -> Result<P2> {
  let angle = point_angle(index, modulus, clockwise, offset_angle)?;
  let radius = scale_factor(modulus);
  Ok(Point2D::new(angle.radians.cos() * radius, angle.radians.sin() * radius))
}

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {}
impl<T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

/// Filled disk
#[derive(Debug, Copy, Clone)]
pub struct Disk {
  pub xy: P2,
  pub r: f32
}

impl SDF<f32> for Disk {
  fn sdf(&self, pixel: P2) -> f32 {
    (pixel - self.xy).length() - self.r
  }
}

impl BoundingBox<f32, WorldSpace> for Disk {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::new(
      self.xy - V2::splat(self.r),
      self.xy + V2::splat(self.r)
    )
  }
}

/// Circle outline of a given stroke width
#[derive(Debug, Copy, Clone)]
pub struct Ring {
  pub xy: P2,
  pub r: f32,
  pub width: f32
}

impl SDF<f32> for Ring {
  fn sdf(&self, pixel: P2) -> f32 {
    ((pixel - self.xy).length() - self.r).abs() - self.width / 2.0
  }
}

impl BoundingBox<f32, WorldSpace> for Ring {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let extent = self.r + self.width / 2.0;
    Box2D::new(
      self.xy - V2::splat(extent),
      self.xy + V2::splat(extent)
    )
  }
}

/// Thick line segment with round caps. Degenerates to a dot when `a == b`.
#[derive(Debug, Copy, Clone)]
pub struct Stroke {
  pub a: P2,
  pub b: P2,
  pub width: f32
}

impl SDF<f32> for Stroke {
  fn sdf(&self, pixel: P2) -> f32 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let len2 = ba.square_length();
    if len2 == 0.0 {
      return pa.length() - self.width / 2.0;
    }
    let h = (pa.dot(ba) / len2).clamp(0.0, 1.0);
    (pa - ba * h).length() - self.width / 2.0
  }
}

impl BoundingBox<f32, WorldSpace> for Stroke {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let half = self.width / 2.0;
    Box2D::from_points([self.a, self.b])
      .inflate(half, half)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn point_one_sits_on_the_offset() -> Result<()> {
    // clockwise layout, 90° offset: point 1 is one slot below the top
    let angle = point_angle(1, 9, true, 90.0)?;
    assert!((angle.to_degrees() - (90.0 - 40.0)).abs() < 1e-4);
    // the point numbered `modulus` closes the circle at the offset itself
    let last = point_angle(9, 9, true, 90.0)?;
    assert!((last.to_degrees() - (90.0 - 360.0)).abs() < 1e-3);
    Ok(())
  }

  #[test] fn layouts_mirror_each_other() -> Result<()> {
    let cw = point_angle(3, 12, true, 90.0)?;
    let ccw = point_angle(3, 12, false, 90.0)?;
    assert!((cw.radians + ccw.radians).abs() < 1e-5);
    Ok(())
  }

  #[test] fn positions_lie_on_the_circle() -> Result<()> {
    let radius = scale_factor(100);
    for index in 1..=100 {
      let p = point_position(index, 100, true, 90.0)?;
      assert!((p.to_vector().length() - radius).abs() < 1e-3);
    }
    Ok(())
  }

  #[test] fn rejects_out_of_range_index() {
    assert!(point_angle(0, 9, true, 90.0).is_err());
    assert!(point_angle(10, 9, true, 90.0).is_err());
    assert!(point_angle(1, 0, true, 90.0).is_err());
  }

  #[test] fn cosmetic_scaling() {
    assert_eq!(scale_factor(9), 1.0);
    assert_eq!(scale_factor(100), 5.0);
    assert_eq!(plot_limit(100), 7.5);
    assert_eq!(label_size(9), 27);
    assert_eq!(label_size(100), 12);
    assert_eq!(label_size(1000), 12);
  }

  #[test] fn stroke_distances() {
    let stroke = Stroke { a: Point2D::new(-1.0, 0.0), b: Point2D::new(1.0, 0.0), width: 0.2 };
    assert!(stroke.sdf(Point2D::new(0.0, 0.0)) < 0.0);
    assert!((stroke.sdf(Point2D::new(0.0, 1.0)) - 0.9).abs() < 1e-5);
    let dot = Stroke { a: Point2D::origin(), b: Point2D::origin(), width: 0.2 };
    assert!((dot.sdf(Point2D::new(1.0, 0.0)) - 0.9).abs() < 1e-5);
  }
}
