//! Climate dataset queries
//!
//! One method per endpoint intent. Aggregates (MIN/MAX/AVG) run inside
//! SQLite in a single query rather than pulling rows into memory, and empty
//! sets follow SQL semantics: NULL, not zero and not an error.

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource}")]
    NotFound { resource: &'static str },

    #[error("invalid date in store: '{value}'")]
    InvalidDate { value: String },
}

/// One (date, precipitation) reading. Precipitation is nullable in the
/// source data and stays null here.
#[derive(Debug, Clone, FromRow)]
pub struct PrecipRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One (date, temperature) observation for a station.
#[derive(Debug, Clone, FromRow)]
pub struct TobsRow {
    pub date: String,
    pub tobs: f64,
}

/// Min/max/avg over a date range. All fields are NULL when no rows match.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TempStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Read-only repository over the `station` and `measurement` tables.
pub struct ClimateRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClimateRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Maximum observation date across all measurements.
    ///
    /// Errors with `NotFound` when the table is empty and `InvalidDate`
    /// when the stored string is not an ISO calendar date.
    pub async fn most_recent_date(&self) -> Result<NaiveDate, DbError> {
        let max: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(self.pool)
            .await?;

        let raw = max.ok_or(DbError::NotFound {
            resource: "measurement",
        })?;
        raw.parse()
            .map_err(|_| DbError::InvalidDate { value: raw })
    }

    /// All (date, precipitation) pairs with date >= `since`, ascending.
    pub async fn precipitation_since(&self, since: &str) -> Result<Vec<PrecipRow>, DbError> {
        let rows = sqlx::query_as(
            "SELECT date, prcp FROM measurement WHERE date >= ?1 ORDER BY date ASC",
        )
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All station identifiers, ascending lexical order. Duplicates in the
    /// source are preserved; no dedup is applied.
    pub async fn list_stations(&self) -> Result<Vec<String>, DbError> {
        let ids = sqlx::query_scalar("SELECT station FROM station ORDER BY station ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(ids)
    }

    /// (date, temperature) pairs for one station with date >= `since`,
    /// ascending by date.
    pub async fn temperature_observations(
        &self,
        station_id: &str,
        since: &str,
    ) -> Result<Vec<TobsRow>, DbError> {
        let rows = sqlx::query_as(
            "SELECT date, tobs FROM measurement \
             WHERE station = ?1 AND date >= ?2 ORDER BY date ASC",
        )
        .bind(station_id)
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Min/max/avg temperature over date >= `start` and, when given,
    /// date <= `end` inclusive. Malformed bounds simply match zero rows.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TempStats, DbError> {
        let stats = match end {
            Some(end) => {
                sqlx::query_as(
                    "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                     FROM measurement WHERE date >= ?1 AND date <= ?2",
                )
                .bind(start)
                .bind(end)
                .fetch_one(self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                     FROM measurement WHERE date >= ?1",
                )
                .bind(start)
                .fetch_one(self.pool)
                .await?
            }
        };

        Ok(stats)
    }
}
