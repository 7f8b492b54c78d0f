//! climate-api: read-only HTTP API over a static climate observations dataset
//!
//! Serves aggregation and filter queries (precipitation history, station
//! listing, temperature observations and min/max/avg stats) from a SQLite
//! file populated by an external data-loading process.

pub mod db;
pub mod http;
pub mod tracing_setup;

pub use http::server::{run_server, AppState, ServerConfig};
