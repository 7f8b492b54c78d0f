//! Temperature min/max/avg over an open or closed date range

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::{ClimateRepo, TempStats};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Aggregate response. All three temperature fields are null when no rows
/// match, including malformed or inverted date ranges.
#[derive(Serialize)]
pub struct TempStatsResponse {
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
}

impl TempStatsResponse {
    fn new(start: String, end: Option<String>, stats: TempStats) -> Self {
        Self {
            start_date: start,
            end_date: end,
            min_temperature: stats.min,
            max_temperature: stats.max,
            avg_temperature: stats.avg,
        }
    }
}

/// GET /{start} - stats from `start` to the end of the dataset
async fn stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TempStatsResponse>, ApiError> {
    let stats = ClimateRepo::new(&state.pool)
        .temperature_stats(&start, None)
        .await?;
    Ok(Json(TempStatsResponse::new(start, None, stats)))
}

/// GET /{start}/{end} - stats over the inclusive range
async fn stats_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TempStatsResponse>, ApiError> {
    let stats = ClimateRepo::new(&state.pool)
        .temperature_stats(&start, Some(&end))
        .await?;
    Ok(Json(TempStatsResponse::new(start, Some(end), stats)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{start}", get(stats_from))
        .route("/{start}/{end}", get(stats_range))
}
