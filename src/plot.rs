//! Ties the pieces together: options in, canvas calls out.

use {
  crate::{
    canvas::Canvas,
    error::Result,
    geometry,
    palette,
    path::{self, Path},
    recurrence::Direction
  },
  euclid::Point2D,
  rand::Rng
};

/// The recognized knobs of a modulus-circle plot.
#[derive(Debug, Clone)]
pub struct PlotOptions {
  /// Seed point of the first path.
  pub start: u64,
  /// Multiplier applied at each recurrence step.
  pub multiplier: u64,
  /// Number of points on the circle, and modulus of the recurrence.
  pub modulus: u64,
  /// Max steps per path before forced termination.
  pub iterations: usize,
  pub direction: Direction,
  /// Angular layout direction of the point indices.
  pub point_order_clockwise: bool,
  /// Rotational offset of point 1, in degrees.
  pub offset_angle: f32,
  /// Canvas background; always excluded from the arc palette.
  pub background_color: String,
  /// Label color; always excluded from the arc palette.
  pub text_color: String,
  /// Seed additional paths from unvisited points.
  pub recursive: bool
}

impl Default for PlotOptions {
  fn default() -> Self {
    Self {
      start: 2,
      multiplier: 2,
      modulus: 9,
      iterations: 18,
      direction: Direction::Forward,
      point_order_clockwise: true,
      offset_angle: 90.0,
      background_color: "black".into(),
      text_color: "white".into(),
      recursive: true
    }
  }
}

/// Generate every path and issue the drawing calls: the outline circle,
/// one labeled marker per point, then one arrow per edge in its path's
/// color. Labels sit at 1.1× the point radius, 1-based.
///
/// Returns the generated paths, so callers can inspect what was drawn.
pub fn plot_modulus_circle(
  options: &PlotOptions,
  rng: &mut impl Rng,
  canvas: &mut impl Canvas
) -> Result<Vec<Path>> {
  let palette = palette::arc_palette(&options.background_color, &options.text_color)?;
  let paths = path::generate_all_paths(
    options.start,
    options.multiplier,
    options.modulus,
    options.iterations,
    options.direction,
    options.recursive,
    &palette,
    rng
  )?;

  let position = |index| geometry::point_position(
    index,
    options.modulus,
    options.point_order_clockwise,
    options.offset_angle
  );

  canvas.draw_circle(Point2D::origin(), geometry::scale_factor(options.modulus));
  for index in 1..=options.modulus {
    let point = position(index)?;
    canvas.draw_point(point);
    canvas.draw_label((point.to_vector() * 1.1).to_point(), &index.to_string());
  }
  for path in &paths {
    for edge in &path.edges {
      canvas.draw_arc(position(edge.from)?, position(edge.to)?, path.color.rgb);
    }
  }
  Ok(paths)
}
