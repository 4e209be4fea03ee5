use axum::{
    Router,
    routing::{get, post},
};

pub mod shop;
pub mod system;

/// Router for the shop endpoints (mounted under `/yak-shop`).
pub fn router() -> Router {
    Router::new()
        .route("/load", post(shop::load))
        .route("/stock/:day", get(shop::stock))
        .route("/herd/:day", get(shop::herd))
        .route("/order/:day", post(shop::order))
        .route("/state", get(system::state))
}
