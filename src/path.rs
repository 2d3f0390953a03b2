//! Path generation: the deterministic edge sequences traced by the
//! recurrence, and the recursive coverage of points no earlier path reached.

use {
  crate::{
    error::{Error, Result},
    palette::NamedColor,
    recurrence::{digital_root, effective_multiplier, Direction}
  },
  rand::{seq::SliceRandom, Rng},
  std::collections::HashSet
};

/// A directed arc between two point indices in `[1, modulus]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Edge {
  pub from: u64,
  pub to: u64
}

/// One traced path together with its assigned arc color.
#[derive(Debug, Clone)]
pub struct Path {
  pub start: u64,
  pub color: NamedColor,
  pub edges: Vec<Edge>
}

fn validate(start: u64, multiplier: u64, modulus: u64) -> Result<()> {
  if modulus == 0 {
    return Err(Error::InvalidParameter("modulus must be positive".into()));
  }
  if multiplier == 0 {
    return Err(Error::InvalidParameter("multiplier must be positive".into()));
  }
  if !(1..=modulus).contains(&start) {
    return Err(Error::InvalidParameter(format!(
      "start point {} outside [1, {}]", start, modulus
    )));
  }
  Ok(())
}

/// Walk the recurrence from `start`, emitting one edge per step. Stops on
/// the first return to `start`, or after `iterations` edges for paths that
/// never close. Every source point is recorded in `visited`.
fn trace(
  start: u64,
  step: u64,
  modulus: u64,
  iterations: usize,
  visited: &mut HashSet<u64>
) -> Vec<Edge> {
  let mut edges = Vec::new();
  let mut current = start;
  for _ in 0..iterations {
    let next = digital_root(current * step, modulus);
    edges.push(Edge { from: current, to: next });
    visited.insert(current);
    if next == start {
      break;
    }
    current = next;
  }
  edges
}

/// The edge sequence of a single path. Deterministic in its arguments.
pub fn generate_path(
  start: u64,
  multiplier: u64,
  modulus: u64,
  iterations: usize,
  direction: Direction
) -> Result<Vec<Edge>> {
  validate(start, multiplier, modulus)?;
  let step = effective_multiplier(multiplier, modulus, direction)?;
  Ok(trace(start, step, modulus, iterations, &mut HashSet::new()))
}

/// The first path from `start`, then — when `recursive` — one path from
/// every point in `[1, modulus)` not yet visited, in ascending order. The
/// point equal to `modulus` never seeds a path of its own, even when left
/// unvisited. That asymmetry is a fixed policy of the plot, not a bug.
///
/// Each path gets a color drawn uniformly (with replacement) from `palette`.
pub fn generate_all_paths(
  start: u64,
  multiplier: u64,
  modulus: u64,
  iterations: usize,
  direction: Direction,
  recursive: bool,
  palette: &[NamedColor],
  rng: &mut impl Rng
) -> Result<Vec<Path>> {
  validate(start, multiplier, modulus)?;
  let step = effective_multiplier(multiplier, modulus, direction)?;

  let mut visited = HashSet::new();
  let mut paths = Vec::new();
  let spawn = |seed: u64, visited: &mut HashSet<u64>, rng: &mut dyn rand::RngCore| -> Result<Path> {
    let color = *palette.choose(rng).ok_or(Error::EmptyPalette)?;
    Ok(Path {
      start: seed,
      color,
      edges: trace(seed, step, modulus, iterations, visited)
    })
  };

  paths.push(spawn(start, &mut visited, &mut *rng)?);
  if recursive {
    for point in 1..modulus {
      if !visited.contains(&point) {
        paths.push(spawn(point, &mut visited, &mut *rng)?);
      }
    }
  }
  Ok(paths)
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::palette,
    rand::SeedableRng,
    rand_pcg::Pcg64
  };

  #[test] fn edges_follow_the_recurrence() -> Result<()> {
    let edges = generate_path(1, 7, 100, 100, Direction::Forward)?;
    assert!(!edges.is_empty());
    for edge in &edges {
      assert_eq!(edge.to, digital_root(edge.from * 7, 100));
    }
    // stops either at the budget or on first return to the start
    let closed = edges.last().map(|edge| edge.to == 1).unwrap_or(false);
    assert!(closed || edges.len() == 100);
    for window in edges.windows(2) {
      assert_eq!(window[0].to, window[1].from);
    }
    Ok(())
  }

  #[test] fn path_is_deterministic() -> Result<()> {
    let a = generate_path(2, 2, 9, 18, Direction::Forward)?;
    let b = generate_path(2, 2, 9, 18, Direction::Forward)?;
    assert_eq!(a, b);
    Ok(())
  }

  #[test] fn zero_iterations_zero_edges() -> Result<()> {
    assert!(generate_path(1, 7, 100, 0, Direction::Forward)?.is_empty());
    Ok(())
  }

  #[test] fn closes_on_return_to_start() -> Result<()> {
    // 2 -> 4 -> 8 -> 7 -> 5 -> 1 -> 2 under doubling mod 9
    let edges = generate_path(2, 2, 9, 18, Direction::Forward)?;
    assert_eq!(edges.last().unwrap().to, 2);
    assert_eq!(edges.len(), 6);
    Ok(())
  }

  #[test] fn backward_retraces_forward() -> Result<()> {
    let forward = generate_path(2, 2, 9, 18, Direction::Forward)?;
    let backward = generate_path(2, 2, 9, 18, Direction::Backward)?;
    // the backward path visits the forward cycle in reverse
    let reversed = forward.iter()
      .map(|edge| Edge { from: edge.to, to: edge.from })
      .rev()
      .collect::<Vec<_>>();
    assert_eq!(backward, reversed);
    Ok(())
  }

  #[test] fn backward_requires_invertible_multiplier() {
    assert!(matches!(
      generate_path(1, 2, 100, 10, Direction::Backward),
      Err(Error::NoModularInverse { .. })
    ));
  }

  #[test] fn rejects_bad_parameters() {
    assert!(generate_path(1, 7, 0, 10, Direction::Forward).is_err());
    assert!(generate_path(0, 7, 100, 10, Direction::Forward).is_err());
    assert!(generate_path(101, 7, 100, 10, Direction::Forward).is_err());
    assert!(generate_path(1, 0, 100, 10, Direction::Forward).is_err());
  }

  #[test] fn recursive_coverage_visits_every_point() -> Result<()> {
    let palette = palette::arc_palette("black", "white")?;
    let mut rng = Pcg64::seed_from_u64(0);
    let paths = generate_all_paths(1, 7, 100, 100, Direction::Forward, true, &palette, &mut rng)?;
    let sources = paths.iter()
      .flat_map(|path| path.edges.iter().map(|edge| edge.from))
      .collect::<HashSet<_>>();
    // the point equal to the modulus is exempt by design
    for point in 1..100 {
      assert!(sources.contains(&point), "point {} never became a source", point);
    }
    Ok(())
  }

  #[test] fn non_recursive_yields_one_path() -> Result<()> {
    let palette = palette::arc_palette("black", "white")?;
    let mut rng = Pcg64::seed_from_u64(0);
    let paths = generate_all_paths(1, 7, 100, 100, Direction::Forward, false, &palette, &mut rng)?;
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].start, 1);
    Ok(())
  }

  #[test] fn colors_deterministic_under_seed() -> Result<()> {
    let palette = palette::arc_palette("black", "white")?;
    let run = |seed| -> Result<Vec<&'static str>> {
      let mut rng = Pcg64::seed_from_u64(seed);
      Ok(
        generate_all_paths(1, 7, 100, 100, Direction::Forward, true, &palette, &mut rng)?
          .into_iter()
          .map(|path| path.color.name)
          .collect()
      )
    };
    assert_eq!(run(42)?, run(42)?);
    Ok(())
  }

  #[test] fn empty_palette_is_an_error() {
    let mut rng = Pcg64::seed_from_u64(0);
    assert!(matches!(
      generate_all_paths(1, 7, 100, 100, Direction::Forward, false, &[], &mut rng),
      Err(Error::EmptyPalette)
    ));
  }
}
