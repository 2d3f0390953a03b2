//! The step function of the vortex recurrence.
//!
//! A path advances by `next = digital_root(current * multiplier, modulus)`;
//! the backward direction multiplies by the modular inverse instead.

use {
  crate::error::{Error, Result},
  num_traits::PrimInt
};

/// Progression direction of a path.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
  /// Multiply by `multiplier` at each step.
  Forward,
  /// Multiply by the inverse of `multiplier` modulo `modulus` at each step.
  Backward
}

/// 1-indexed modular reduction: maps any positive `n` into `[1, modulus]`,
/// and `0` to `0`. Unlike `n % modulus`, a full multiple of the modulus maps
/// to the modulus itself rather than wrapping to zero.
pub fn digital_root<T: PrimInt>(n: T, modulus: T) -> T {
  if n == T::zero() {
    T::zero()
  } else {
    (n - T::one()) % modulus + T::one()
  }
}

/// Inverse of `a` modulo `modulus`, via the extended Euclidean algorithm.
pub fn mod_inverse(a: u64, modulus: u64) -> Result<u64> {
  let (mut r0, mut r1) = (modulus as i128, (a % modulus) as i128);
  let (mut t0, mut t1) = (0i128, 1i128);
  while r1 != 0 {
    let q = r0 / r1;
    (r0, r1) = (r1, r0 - q * r1);
    (t0, t1) = (t1, t0 - q * t1);
  }
  if r0 != 1 {
    return Err(Error::NoModularInverse { multiplier: a, modulus });
  }
  Ok(t0.rem_euclid(modulus as i128) as u64)
}

/// The constant each step multiplies by, reduced into `[1, modulus]`.
///
/// Reducing up front keeps `current * step` well within `u64` for any sane
/// modulus, and does not change the recurrence: `digital_root` only depends
/// on the product's residue, and both factors stay positive.
pub fn effective_multiplier(multiplier: u64, modulus: u64, direction: Direction) -> Result<u64> {
  match direction {
    Direction::Forward => Ok(digital_root(multiplier, modulus)),
    // an inverse of 0 only occurs for modulus 1; its 1-indexed
    // representative is the modulus itself
    Direction::Backward => Ok(digital_root(mod_inverse(multiplier, modulus)? + modulus, modulus))
  }
}
