//! SQL schema for the Tassel SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The `UNIQUE` constraint on `slug` is what upholds the directory's
/// one-slug-per-guest invariant; inserts that violate it are mapped to
/// [`tassel_core::Error::DuplicateSlug`](tassel_core::Error) by the store.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS friends (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    slug        TEXT NOT NULL UNIQUE,
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

PRAGMA user_version = 1;
";
