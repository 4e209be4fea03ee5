use axum::http::StatusCode;
use serde::Serialize;

use yakshop_core::Days;
use yakshop_shop::Order;

use crate::app::errors;
use crate::app::services::{ShopService, ShopState};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub day: u32,
    pub animals: usize,
    pub loaded_at: String,
}

impl From<ShopState> for StateResponse {
    fn from(state: ShopState) -> Self {
        Self {
            day: state.current_day.get(),
            animals: state.animals,
            loaded_at: state.loaded_at.to_rfc3339(),
        }
    }
}

// -------------------------
// Parsing helpers
// -------------------------

/// Parse a `{day}` path segment and check it against the configured ceiling.
pub fn parse_day(service: &ShopService, raw: &str) -> Result<Days, axum::response::Response> {
    let day: u32 = raw.trim().parse().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_day",
            format!("day must be a non-negative integer (got {raw:?})"),
        )
    })?;

    service.check_day(day).map_err(errors::domain_error_to_response)
}

/// Parse and validate an order body.
///
/// Parsed from raw bytes so that clients which omit the JSON content type
/// are still served.
pub fn parse_order(body: &[u8]) -> Result<Order, axum::response::Response> {
    let order: Order = serde_json::from_slice(body).map_err(|e| {
        errors::json_error(StatusCode::BAD_REQUEST, "malformed_order", format!("cannot parse order: {e}"))
    })?;

    order.validate().map_err(errors::domain_error_to_response)?;
    Ok(order)
}
