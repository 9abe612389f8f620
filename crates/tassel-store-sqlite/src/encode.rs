//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, Utc};
use tassel_core::guest::Guest;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Rows ─────────────────────────────────────────────────────────────────────

/// A `friends` row as it comes out of SQLite, before decoding.
pub struct RawGuest {
  pub id:         String,
  pub name:       String,
  pub slug:       String,
  pub created_at: String,
}

impl RawGuest {
  pub fn into_guest(self) -> Result<Guest> {
    Ok(Guest {
      id:         Uuid::parse_str(&self.id)?,
      name:       self.name,
      slug:       self.slug,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
