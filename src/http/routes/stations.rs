//! Station identifier listing

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::db::ClimateRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /stations - station identifiers, ascending, as a JSON array
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let ids = ClimateRepo::new(&state.pool).list_stations().await?;
    Ok(Json(ids))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stations", get(stations))
}
