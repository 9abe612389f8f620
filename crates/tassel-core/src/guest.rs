//! Guest — a named invitee with a derived slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, slug::slugify};

/// An invitee in the guest directory.
///
/// `id`, `slug`, and `created_at` are assigned once at construction and
/// never change; there is no update operation anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
  pub id:         Uuid,
  pub name:       String,
  pub slug:       String,
  pub created_at: DateTime<Utc>,
}

impl Guest {
  /// Build a new guest from a display name.
  ///
  /// Assigns a fresh UUID and the current time, and derives the slug via
  /// [`slugify`]. Rejects empty names and names with no sluggable content;
  /// slug *uniqueness* is enforced by the directory on insert, not here.
  pub fn new(name: &str) -> Result<Self> {
    if name.trim().is_empty() {
      return Err(Error::EmptyName);
    }

    let slug = slugify(name);
    if slug.is_empty() {
      return Err(Error::UnsluggableName(name.to_owned()));
    }

    Ok(Self {
      id: Uuid::new_v4(),
      name: name.to_owned(),
      slug,
      created_at: Utc::now(),
    })
  }
}
