//! Handlers for the `/api/friends` and `/api/init-data` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/friends` | All guests |
//! | `POST` | `/api/friends` | Body: `{"name":"..."}`; 400 empty, 409 duplicate slug |
//! | `GET`  | `/api/friends/{slug}` | 404 if not found |
//! | `POST` | `/api/init-data` | Reseed with the fixed sample list |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tassel_core::{guest::Guest, info::SAMPLE_GUEST_NAMES, store::GuestStore};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/friends`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Guest>>, ApiError>
where
  S: GuestStore,
{
  let guests = store.list_guests().await.map_err(ApiError::from_store)?;
  Ok(Json(guests))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name: String,
}

/// `POST /api/friends` — body: `{"name":"An"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GuestStore,
{
  let guest = store
    .create_guest(&body.name)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(guest)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/friends/{slug}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Guest>, ApiError>
where
  S: GuestStore,
{
  let guest = store
    .find_by_slug(&slug)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("no guest with slug {slug:?}")))?;
  Ok(Json(guest))
}

// ─── Init data ────────────────────────────────────────────────────────────────

/// `POST /api/init-data` — wipe the directory and insert the sample list.
pub async fn init_data<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GuestStore,
{
  let guests = store
    .reseed(&SAMPLE_GUEST_NAMES)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(count = guests.len(), "reseeded guest directory");
  Ok(Json(json!({ "message": "Sample data initialized" })))
}
