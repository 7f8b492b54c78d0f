//! Temperature observations for one station over the most recent year

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::{window, ClimateRepo, TobsRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Historically the most active station in the dataset; kept as the default
/// so existing clients keep working without the query parameter.
pub const DEFAULT_STATION: &str = "USC00519281";

#[derive(Deserialize)]
pub struct TobsParams {
    /// Station identifier; defaults to [`DEFAULT_STATION`].
    pub station: Option<String>,
}

/// One observation record
#[derive(Serialize)]
pub struct TobsResponse {
    pub date: String,
    pub temperature: f64,
}

impl From<TobsRow> for TobsResponse {
    fn from(r: TobsRow) -> Self {
        Self {
            date: r.date,
            temperature: r.tobs,
        }
    }
}

/// GET /tobs?station=<id> - (date, temperature) records over the 12 calendar
/// months up to the most recent observation, ascending by date
async fn tobs(
    State(state): State<AppState>,
    Query(params): Query<TobsParams>,
) -> Result<Json<Vec<TobsResponse>>, ApiError> {
    let station = params.station.as_deref().unwrap_or(DEFAULT_STATION);
    let repo = ClimateRepo::new(&state.pool);

    let most_recent = repo.most_recent_date().await?;
    let cutoff = window::year_window_start(most_recent)
        .format("%Y-%m-%d")
        .to_string();
    let rows = repo.temperature_observations(station, &cutoff).await?;

    Ok(Json(rows.into_iter().map(TobsResponse::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/tobs", get(tobs))
}
