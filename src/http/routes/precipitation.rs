//! Precipitation over the most recent year of data

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::{Map, Value};

use crate::db::{window, ClimateRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /precipitation - date -> precipitation for the 12 calendar months up
/// to the most recent observation. Null readings stay null.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let repo = ClimateRepo::new(&state.pool);

    let most_recent = repo.most_recent_date().await?;
    let cutoff = window::year_window_start(most_recent)
        .format("%Y-%m-%d")
        .to_string();
    let rows = repo.precipitation_since(&cutoff).await?;

    // Keys are ISO dates, so the map's lexical key order is date order.
    let mut body = Map::new();
    for row in rows {
        body.insert(row.date, row.prcp.map_or(Value::Null, Value::from));
    }

    Ok(Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/precipitation", get(precipitation))
}
