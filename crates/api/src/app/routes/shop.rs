use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use yakshop_herd::{HerdFormat, parse_herd};
use yakshop_shop::FulfillmentStatus;

use crate::app::services::ShopService;
use crate::app::{dto, errors};

/// Run a day-stepping operation on the blocking pool. Advancing far ahead
/// holds the shop lock for the whole simulation.
async fn simulate<R, F>(service: Arc<ShopService>, f: F) -> Result<R, axum::response::Response>
where
    R: Send + 'static,
    F: FnOnce(&ShopService) -> R + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&service)).await.map_err(|e| {
        errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            format!("simulation task failed: {e}"),
        )
    })
}

pub async fn load(
    Extension(service): Extension<Arc<ShopService>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let body = match std::str::from_utf8(&body) {
        Ok(b) => b,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "malformed_herd", "body is not valid UTF-8");
        }
    };

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let format = HerdFormat::detect(content_type, body);

    let herd = match parse_herd(format, body) {
        Ok(h) => h,
        Err(e) => return errors::import_error_to_response(e),
    };

    let animals = service.load(herd);
    tracing::info!(animals, ?format, "new herd loaded");

    StatusCode::RESET_CONTENT.into_response()
}

pub async fn stock(
    Extension(service): Extension<Arc<ShopService>>,
    Path(day): Path<String>,
) -> axum::response::Response {
    let day = match dto::parse_day(&service, &day) {
        Ok(d) => d,
        Err(res) => return res,
    };

    match simulate(service, move |s| s.stock_at(day)).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(res) => res,
    }
}

pub async fn herd(
    Extension(service): Extension<Arc<ShopService>>,
    Path(day): Path<String>,
) -> axum::response::Response {
    let day = match dto::parse_day(&service, &day) {
        Ok(d) => d,
        Err(res) => return res,
    };

    match simulate(service, move |s| s.herd_at(day)).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(res) => res,
    }
}

pub async fn order(
    Extension(service): Extension<Arc<ShopService>>,
    Path(day): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let day = match dto::parse_day(&service, &day) {
        Ok(d) => d,
        Err(res) => return res,
    };

    let order = match dto::parse_order(&body) {
        Ok(o) => o,
        Err(res) => return res,
    };

    let fulfillment = match simulate(service, move |s| s.order_at(day, &order)).await {
        Ok(f) => f,
        Err(res) => return res,
    };

    let status = match fulfillment.status {
        FulfillmentStatus::Created => StatusCode::CREATED,
        FulfillmentStatus::Partial => StatusCode::PARTIAL_CONTENT,
        FulfillmentStatus::NotFound => StatusCode::NOT_FOUND,
    };

    (status, Json(fulfillment.shipped)).into_response()
}
