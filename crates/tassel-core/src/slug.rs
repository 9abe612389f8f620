//! Deterministic slug generation from display names.
//!
//! A slug is the URL path segment a guest's invitation lives under, so the
//! mapping from name to slug must be stable across processes and versions:
//! NFD-decompose, drop combining marks, lowercase, then collapse everything
//! outside `[a-z0-9]` into single hyphens.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Derive a URL-safe slug from a display name.
///
/// `"Nguyễn Văn Tuyên"` becomes `"nguyen-van-tuyen"`. The result contains
/// only lowercase ASCII letters, digits, and single interior hyphens. Names
/// with no alphanumeric content (e.g. `"!!!"`) produce an empty string;
/// rejecting those is the caller's decision (see [`crate::guest::Guest::new`]).
pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut pending_gap = false;

  let chars = name
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .flat_map(char::to_lowercase);

  for c in chars {
    if c.is_ascii_alphanumeric() {
      // A pending gap only materialises between two kept characters, which
      // both collapses runs and trims leading/trailing hyphens.
      if pending_gap && !slug.is_empty() {
        slug.push('-');
      }
      slug.push(c);
      pending_gap = false;
    } else {
      pending_gap = true;
    }
  }

  slug
}
