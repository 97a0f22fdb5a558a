//! SQLite-backed key-value store for the form record.
//!
//! The record lives in a single fixed namespace (`"data"`) as two entries,
//! `"name"` and `"email"`. Saves commit both entries in one transaction;
//! loads default missing entries to the empty string rather than failing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use form_core::RecordStore;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use shared::domain::Record;

/// Namespace holding the form record.
pub const RECORD_NAMESPACE: &str = "data";

const NAME_KEY: &str = "name";
const EMAIL_KEY: &str = "email";

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    /// Writes both record fields in one transaction; either both entries land
    /// or neither does.
    pub async fn save_record(&self, record: &Record) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (key, value) in [(NAME_KEY, &record.name), (EMAIL_KEY, &record.email)] {
            sqlx::query(
                "INSERT INTO kv_entries (namespace, key, value, updated_at)
                 VALUES (?, ?, ?, CURRENT_TIMESTAMP)
                 ON CONFLICT(namespace, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = CURRENT_TIMESTAMP",
            )
            .bind(RECORD_NAMESPACE)
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to upsert '{key}' entry"))?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Reads the record back, defaulting absent entries to the empty string.
    pub async fn load_record(&self) -> Result<Record> {
        let rows = sqlx::query("SELECT key, value FROM kv_entries WHERE namespace = ?")
            .bind(RECORD_NAMESPACE)
            .fetch_all(&self.pool)
            .await?;

        let mut record = Record::default();
        for row in rows {
            let key = row.get::<String, _>(0);
            let value = row.get::<String, _>(1);
            match key.as_str() {
                NAME_KEY => record.name = value,
                EMAIL_KEY => record.email = value,
                _ => {}
            }
        }
        Ok(record)
    }

    /// Timestamp of the most recent write to the record namespace, if any.
    pub async fn record_updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        let row = sqlx::query("SELECT MAX(updated_at) FROM kv_entries WHERE namespace = ?")
            .bind(RECORD_NAMESPACE)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get::<Option<DateTime<Utc>>, _>(0))
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[async_trait]
impl RecordStore for Storage {
    async fn save(&self, record: Record) -> Result<()> {
        self.save_record(&record).await
    }

    async fn load(&self) -> Result<Record> {
        self.load_record().await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
