//! The reference vortex: 100 points, multiplier 7, recursive coverage.

use {
  modulus_circle::{
    drawing,
    plot::PlotOptions,
    recurrence::Direction
  },
  anyhow::Result,
  rand::SeedableRng
};

fn main() -> Result<()> {
  let path = "out.png";
  let options = PlotOptions {
    start: 1,
    multiplier: 7,
    modulus: 100,
    iterations: 100,
    direction: Direction::Forward,
    ..PlotOptions::default()
  };
  let mut rng = rand_pcg::Pcg64::from_entropy();

  let image = drawing::render(&options, 1024, 1024, &mut rng)?;
  image.save(path)?;
  open::that(path)?;
  Ok(())
}
