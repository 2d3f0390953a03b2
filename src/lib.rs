//! Modulus-circle ("vortex") plots: `modulus` equidistant points on a
//! circle, joined by directed arcs following the digital-root recurrence
//! `next = digital_root(current * multiplier, modulus)`.
//!
//! Path generation is pure and deterministic; everything a rendering
//! surface must provide fits in the [`canvas::Canvas`] trait, and an
//! `image`-backed implementation lives in the `drawing` module (requires
//! the `drawing` feature). Arc colors are drawn from a luminance-filtered
//! named-color palette through an injected rng, so a fixed seed reproduces
//! a plot exactly.
//!
//! # Basic usage
//! ```
//! use {
//!   modulus_circle::{
//!     error::Result,
//!     palette,
//!     path,
//!     recurrence::Direction
//!   },
//!   rand::SeedableRng
//! };
//!
//! fn main() -> Result<()> {
//!   let palette = palette::arc_palette("black", "white")?;
//!   let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!   let paths = path::generate_all_paths(
//!     1, 7, 100, 100,
//!     Direction::Forward,
//!     true, // seed further paths until every point is covered
//!     &palette,
//!     &mut rng
//!   )?;
//!   assert!(paths.iter().all(|path| !path.edges.is_empty()));
//!   Ok(())
//! }
//! ```
//! With the `drawing` feature, `drawing::render` turns
//! [`plot::PlotOptions`] into an `RgbaImage` ready to save; see
//! `demos/vortex.rs` for the full picture.

pub mod error;
pub mod recurrence;
pub mod palette;
pub mod path;
pub mod geometry;
pub mod canvas;
pub mod plot;
#[cfg(feature = "drawing")]
pub mod drawing;
