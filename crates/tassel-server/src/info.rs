//! Handlers for the API index and the static graduation-info record.

use axum::Json;
use serde_json::{Value, json};
use tassel_core::info::GraduationInfo;

/// `GET /api/`
pub async fn index() -> Json<Value> {
  Json(json!({ "message": "Graduation Invitation API" }))
}

/// `GET /api/graduation-info`
pub async fn graduation_info() -> Json<GraduationInfo> {
  Json(GraduationInfo::current())
}
