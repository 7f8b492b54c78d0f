//! Startup schema validation
//!
//! The dataset schema is fixed (two tables, known columns), so drift is a
//! fatal startup error rather than something discovered at request time.

use sqlx::SqlitePool;

/// Expected tables and the columns each must carry.
const EXPECTED: &[(&str, &[&str])] = &[
    (
        "station",
        &["station", "name", "latitude", "longitude", "elevation"],
    ),
    ("measurement", &["station", "date", "prcp", "tobs"]),
];

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("expected table '{table}' is missing")]
    MissingTable { table: &'static str },

    #[error("table '{table}' is missing column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// Verify both expected tables exist with their expected columns.
pub async fn validate(pool: &SqlitePool) -> Result<(), SchemaError> {
    for &(table, columns) in EXPECTED {
        let exists: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )
        .bind(table)
        .fetch_optional(pool)
        .await?;

        if exists.is_none() {
            return Err(SchemaError::MissingTable { table });
        }

        let present: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
            .bind(table)
            .fetch_all(pool)
            .await?;

        for &column in columns {
            if !present.iter().any(|c| c == column) {
                return Err(SchemaError::MissingColumn { table, column });
            }
        }

        tracing::debug!(table, columns = present.len(), "schema table validated");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repo::tests::empty_pool;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn bare_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_expected_schema() {
        let pool = empty_pool().await;
        validate(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_missing_table() {
        let pool = bare_pool().await;
        sqlx::query(
            "CREATE TABLE station (station TEXT, name TEXT, \
             latitude REAL, longitude REAL, elevation REAL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = validate(&pool).await.unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingTable {
                table: "measurement"
            }
        ));
    }

    #[tokio::test]
    async fn rejects_missing_column() {
        let pool = bare_pool().await;
        sqlx::query(
            "CREATE TABLE station (station TEXT, name TEXT, \
             latitude REAL, longitude REAL, elevation REAL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        // measurement without the prcp column
        sqlx::query("CREATE TABLE measurement (station TEXT, date TEXT, tobs REAL)")
            .execute(&pool)
            .await
            .unwrap();

        let err = validate(&pool).await.unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingColumn {
                table: "measurement",
                column: "prcp"
            }
        ));
    }
}
