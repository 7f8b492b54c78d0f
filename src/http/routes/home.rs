//! Capability listing at the root path

use axum::{routing::get, Router};

const ROUTES: &str = "Climate API. Available routes:\n\
    /\n\
    /api/v1.0/precipitation\n\
    /api/v1.0/stations\n\
    /api/v1.0/tobs\n\
    /api/v1.0/<start>\n\
    /api/v1.0/<start>/<end>\n";

/// GET / - plain-text listing of the available routes
async fn home() -> &'static str {
    ROUTES
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
