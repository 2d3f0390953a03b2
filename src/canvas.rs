//! The drawing collaborator boundary.
//!
//! Everything the plot needs from a rendering surface fits in four calls,
//! so the recurrence and layout logic stays testable without any graphics
//! backend in the picture. Point, label and outline styling belongs to the
//! backend; only arcs carry a caller-chosen color.

use crate::{geometry::P2, palette::Rgb};

pub trait Canvas {
  /// Outline circle the points sit on.
  fn draw_circle(&mut self, center: P2, radius: f32);
  /// A point marker on the circumference.
  fn draw_point(&mut self, at: P2);
  /// Text centered on `anchor`.
  fn draw_label(&mut self, anchor: P2, text: &str);
  /// Directed arc from one point to another.
  fn draw_arc(&mut self, from: P2, to: P2, color: Rgb);
}
