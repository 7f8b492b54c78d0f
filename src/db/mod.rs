//! Database layer - read-only pool, schema validation, and queries
//!
//! The dataset is owned by an external loader; this layer never writes.
//! All queries are parameterized and aggregation is pushed into SQLite.

pub mod pool;
pub mod repo;
pub mod schema;
pub mod window;

pub use pool::open_read_only;
pub use repo::{ClimateRepo, DbError, PrecipRow, TempStats, TobsRow};
pub use schema::{validate, SchemaError};
pub use window::year_window_start;
