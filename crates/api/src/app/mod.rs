//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared shop and the operations handlers call on it
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use yakshop_shop::Shop;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::ShopService;

/// Build the full HTTP router around a fresh, empty shop.
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_service(Arc::new(ShopService::new(Shop::new(), config.max_day)))
}

/// Build the router around an existing service (lets tests inspect the shop).
pub fn build_app_with_service(service: Arc<ShopService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/yak-shop", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(service)),
        )
}
