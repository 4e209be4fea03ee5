use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::StateResponse;
use crate::app::services::ShopService;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn state(Extension(service): Extension<Arc<ShopService>>) -> impl IntoResponse {
    Json(StateResponse::from(service.state()))
}
