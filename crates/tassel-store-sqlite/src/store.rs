//! [`SqliteStore`] — the SQLite implementation of [`GuestStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tassel_core::{guest::Guest, store::GuestStore};

use crate::{
  Error, Result,
  encode::{RawGuest, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A guest directory backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Column tuple for one `friends` row, encoded and ready to bind.
fn encode_row(guest: &Guest) -> (String, String, String, String) {
  (
    encode_uuid(guest.id),
    guest.name.clone(),
    guest.slug.clone(),
    encode_dt(guest.created_at),
  )
}

/// Map a UNIQUE-constraint failure on `friends.slug` to the domain error;
/// pass everything else through as a database error.
fn map_insert_err(slug: &str, e: tokio_rusqlite::Error) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, _)) = &e
    && code.code == rusqlite::ErrorCode::ConstraintViolation
  {
    return Error::Core(tassel_core::Error::DuplicateSlug(slug.to_owned()));
  }
  Error::Database(e)
}

// ─── GuestStore impl ─────────────────────────────────────────────────────────

impl GuestStore for SqliteStore {
  type Error = Error;

  async fn create_guest(&self, name: &str) -> Result<Guest> {
    let guest = Guest::new(name)?;
    let (id_str, name_str, slug_str, at_str) = encode_row(&guest);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO friends (id, name, slug, created_at) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, name_str, slug_str, at_str],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| map_insert_err(&guest.slug, e))?;

    Ok(guest)
  }

  async fn reseed(&self, names: &[&str]) -> Result<Vec<Guest>> {
    let guests = names
      .iter()
      .map(|name| Guest::new(name))
      .collect::<tassel_core::Result<Vec<_>>>()?;

    // Catch intra-batch collisions before touching the database, so the
    // error names the offending slug instead of a bare constraint failure.
    let mut seen: Vec<&str> = Vec::with_capacity(guests.len());
    for guest in &guests {
      if seen.contains(&guest.slug.as_str()) {
        return Err(Error::Core(tassel_core::Error::DuplicateSlug(
          guest.slug.clone(),
        )));
      }
      seen.push(&guest.slug);
    }

    let rows: Vec<_> = guests.iter().map(encode_row).collect();

    // Delete and insert in one transaction: a reseed either applies fully
    // or leaves the previous directory intact.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM friends", [])?;
        for (id_str, name_str, slug_str, at_str) in &rows {
          tx.execute(
            "INSERT INTO friends (id, name, slug, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id_str, name_str, slug_str, at_str],
          )?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(guests)
  }

  async fn list_guests(&self) -> Result<Vec<Guest>> {
    let raws: Vec<RawGuest> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, name, slug, created_at FROM friends")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawGuest {
              id:         row.get(0)?,
              name:       row.get(1)?,
              slug:       row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawGuest::into_guest).collect()
  }

  async fn find_by_slug(&self, slug: &str) -> Result<Option<Guest>> {
    let slug_str = slug.to_owned();

    let raw: Option<RawGuest> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, slug, created_at FROM friends WHERE slug = ?1",
              rusqlite::params![slug_str],
              |row| {
                Ok(RawGuest {
                  id:         row.get(0)?,
                  name:       row.get(1)?,
                  slug:       row.get(2)?,
                  created_at: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawGuest::into_guest).transpose()
  }
}
