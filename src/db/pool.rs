//! Read-only SQLite connection pool

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low: every request is a single short read.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a read-only pool over an existing SQLite file.
///
/// The file must already exist; `create_if_missing` stays off so a missing
/// dataset fails at startup instead of serving an empty database.
pub async fn open_read_only(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .immutable(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.sqlite");
        assert!(open_read_only(&path).await.is_err());
    }

    #[tokio::test]
    async fn opens_existing_file_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.sqlite");

        // Seed a file with a writable connection first.
        let seed = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true),
            )
            .await
            .unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&seed)
            .await
            .unwrap();
        seed.close().await;

        let pool = open_read_only(&path).await.unwrap();
        let err = sqlx::query("INSERT INTO t (x) VALUES (1)")
            .execute(&pool)
            .await;
        assert!(err.is_err(), "writes must be rejected");
    }
}
