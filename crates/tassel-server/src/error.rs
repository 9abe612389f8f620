//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Convert a backend error into an API error.
  ///
  /// Backends wrap domain failures (duplicate slug, rejected name) somewhere
  /// in their error chain, so walk the sources looking for
  /// [`tassel_core::Error`] and give those their own status codes. Anything
  /// else is an opaque storage failure.
  pub fn from_store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(e);

    let mut cur: Option<&(dyn std::error::Error + 'static)> = Some(&*boxed);
    while let Some(err) = cur {
      if let Some(core) = err.downcast_ref::<tassel_core::Error>() {
        return match core {
          tassel_core::Error::EmptyName
          | tassel_core::Error::UnsluggableName(_) => {
            ApiError::BadRequest(core.to_string())
          }
          tassel_core::Error::DuplicateSlug(_) => {
            ApiError::Conflict(core.to_string())
          }
        };
      }
      cur = err.source();
    }

    ApiError::Store(boxed)
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
