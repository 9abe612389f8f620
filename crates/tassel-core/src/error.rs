//! Error types for `tassel-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("guest name must not be empty")]
  EmptyName,

  /// The name contains no character that survives slug normalisation,
  /// e.g. `"!!!"` or a string of emoji.
  #[error("name {0:?} produces an empty slug")]
  UnsluggableName(String),

  #[error("a guest with slug {0:?} already exists")]
  DuplicateSlug(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
