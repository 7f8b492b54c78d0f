//! Route handlers organized by endpoint

pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temps;
pub mod tobs;

use axum::Router;

use crate::http::server::AppState;

/// All /api/v1.0 routes. The named routes are static segments, so they take
/// priority over the `{start}` capture.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(precipitation::router())
        .merge(stations::router())
        .merge(tobs::router())
        .merge(temps::router())
}
