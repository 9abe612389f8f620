//! Integration tests for `SqliteStore` against an in-memory database.

use tassel_core::{info::SAMPLE_GUEST_NAMES, slug::slugify, store::GuestStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_find_by_slug() {
  let s = store().await;

  let guest = s.create_guest("Nguyễn Văn Tuyên").await.unwrap();
  assert_eq!(guest.slug, "nguyen-van-tuyen");

  let fetched = s.find_by_slug("nguyen-van-tuyen").await.unwrap();
  assert!(fetched.is_some());
  let fetched = fetched.unwrap();
  assert_eq!(fetched.id, guest.id);
  assert_eq!(fetched.name, "Nguyễn Văn Tuyên");
  assert_eq!(fetched.created_at, guest.created_at);
}

#[tokio::test]
async fn create_duplicate_slug_errors() {
  let s = store().await;

  s.create_guest("Tuan Anh").await.unwrap();
  // Different display string, identical normalised slug.
  let err = s.create_guest("TUẤN ANH").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tassel_core::Error::DuplicateSlug(ref slug)) if slug.as_str() == "tuan-anh"
  ));

  // The first guest is untouched.
  let all = s.list_guests().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Tuan Anh");
}

#[tokio::test]
async fn create_empty_name_errors() {
  let s = store().await;
  let err = s.create_guest("  ").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tassel_core::Error::EmptyName)
  ));
}

#[tokio::test]
async fn create_symbol_only_name_errors() {
  let s = store().await;
  let err = s.create_guest("!!!").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tassel_core::Error::UnsluggableName(_))
  ));
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_slug_missing_returns_none() {
  let s = store().await;
  let result = s.find_by_slug("unknown-slug").await.unwrap();
  assert!(result.is_none());
}

// ─── Reseed ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reseed_inserts_one_guest_per_name() {
  let s = store().await;

  let guests = s.reseed(&SAMPLE_GUEST_NAMES).await.unwrap();
  assert_eq!(guests.len(), SAMPLE_GUEST_NAMES.len());

  let all = s.list_guests().await.unwrap();
  assert_eq!(all.len(), SAMPLE_GUEST_NAMES.len());

  // Every seeded name is findable under its derived slug.
  for name in SAMPLE_GUEST_NAMES {
    let found = s.find_by_slug(&slugify(name)).await.unwrap();
    assert_eq!(found.expect("seeded guest").name, name);
  }
}

#[tokio::test]
async fn reseed_replaces_previous_directory() {
  let s = store().await;

  s.reseed(&["An", "Binh"]).await.unwrap();
  s.reseed(&["Chi"]).await.unwrap();

  let all = s.list_guests().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Chi");

  assert!(s.find_by_slug("an").await.unwrap().is_none());
  assert!(s.find_by_slug("binh").await.unwrap().is_none());
  assert!(s.find_by_slug("chi").await.unwrap().is_some());
}

#[tokio::test]
async fn reseed_with_colliding_names_errors_and_keeps_old_data() {
  let s = store().await;

  s.reseed(&["An"]).await.unwrap();

  let err = s.reseed(&["Hà", "HÀ"]).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tassel_core::Error::DuplicateSlug(ref slug)) if slug.as_str() == "ha"
  ));

  // The failed reseed must not have wiped the directory.
  let all = s.list_guests().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "An");
}

#[tokio::test]
async fn reseed_with_empty_list_clears_directory() {
  let s = store().await;

  s.reseed(&["An"]).await.unwrap();
  s.reseed(&[]).await.unwrap();

  assert!(s.list_guests().await.unwrap().is_empty());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_directory() {
  let s = store().await;
  assert!(s.list_guests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_created_guests() {
  let s = store().await;

  s.create_guest("An").await.unwrap();
  s.create_guest("Binh").await.unwrap();
  s.create_guest("Chi").await.unwrap();

  let all = s.list_guests().await.unwrap();
  assert_eq!(all.len(), 3);

  let names: Vec<_> = all.iter().map(|g| g.name.as_str()).collect();
  assert!(names.contains(&"An"));
  assert!(names.contains(&"Binh"));
  assert!(names.contains(&"Chi"));
}
