//! JSON HTTP layer for the Tassel invitation backend.
//!
//! Exposes an axum [`Router`] backed by any [`tassel_core::store::GuestStore`].
//! TLS and transport concerns are the caller's responsibility.

pub mod error;
pub mod friends;
pub mod info;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tassel_core::store::GuestStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with
/// `TASSEL_*` environment overrides.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. The invitation frontend is served from a different
/// origin, hence the permissive CORS layer.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: GuestStore + 'static,
{
  Router::new()
    .route("/api/", get(info::index))
    .route("/api/friends", get(friends::list::<S>).post(friends::create::<S>))
    .route("/api/friends/{slug}", get(friends::get_one::<S>))
    .route("/api/init-data", post(friends::init_data::<S>))
    .route("/api/graduation-info", get(info::graduation_info))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
