use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A color token could not be resolved against the named-color table.
  #[error("unknown color name `{0}`")]
  InvalidColorName(String),

  /// Backward progression needs `gcd(multiplier, modulus) == 1`.
  #[error("{multiplier} has no inverse modulo {modulus}")]
  NoModularInverse { multiplier: u64, modulus: u64 },

  #[error("invalid parameter: {0}")]
  InvalidParameter(String),

  /// Luminance filtering left no usable arc colors.
  #[error("arc palette is empty after luminance filtering")]
  EmptyPalette,

  #[cfg(feature = "drawing")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
