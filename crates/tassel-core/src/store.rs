//! The `GuestStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tassel-store-sqlite`).
//! The HTTP layer (`tassel-server`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::guest::Guest;

/// Abstraction over a guest-directory backend.
///
/// Guests are terminal records: they are created (singly or by bulk reseed)
/// and read, never updated. `reseed` is the only destructive operation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait GuestStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and persist one guest from a display name.
  ///
  /// The store assigns the id and timestamp and derives the slug. Fails if
  /// the name is empty, yields an empty slug, or the slug already belongs
  /// to another guest.
  fn create_guest<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Guest, Self::Error>> + Send + 'a;

  /// Replace the entire directory: delete every guest, then insert one new
  /// guest per input name. Last writer wins across overlapping calls.
  fn reseed<'a>(
    &'a self,
    names: &'a [&'a str],
  ) -> impl Future<Output = Result<Vec<Guest>, Self::Error>> + Send + 'a;

  /// List all guests. Ordering is whatever the backend returns; insertion
  /// order in practice, but not guaranteed.
  fn list_guests(
    &self,
  ) -> impl Future<Output = Result<Vec<Guest>, Self::Error>> + Send + '_;

  /// Point lookup by slug. Returns `None` if no guest has that slug.
  fn find_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Guest>, Self::Error>> + Send + 'a;
}
