//! Defines [`Error`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
  /// The geometry parser could not produce a point from the input.
  #[error("{0}")]
  InvalidGeometry(String),

  /// [serde_json::Error]
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// [std::io::Error]
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
