//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use exchange_types::{
    Currency, CurrencyCodeMapper, CurrencyRepository, Exchange, ExchangeRepository, IdSource,
    RandomIds, RepoError,
};

use crate::types::{CURRENCY_COLUMNS, DbCurrency, DbExchange, exchange_select, map_write_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
    ids: Arc<dyn IdSource>,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        Self::with_ids(database_url, Arc::new(RandomIds)).await
    }

    /// Creates a new SQLite repository keying rows with ids from `ids`.
    pub async fn with_ids(database_url: &str, ids: Arc<dyn IdSource>) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:");

        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if !in_memory {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` opens its own database, and closing
        // the last one drops it. Keep exactly one connection alive for good.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(10)
        };
        let pool = pool_options.connect_with(options).await?;

        let repo = Self { pool, ids };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_catalog.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for SqliteRepo {
    async fn fetch_by_code(&self, code: &str) -> Result<Option<Currency>, RepoError> {
        let sql = format!("SELECT {CURRENCY_COLUMNS} FROM currencies WHERE code = ?");

        let row: Option<DbCurrency> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbCurrency::into_domain))
    }

    async fn fetch_all(&self) -> Result<Vec<Currency>, RepoError> {
        let sql = format!("SELECT {CURRENCY_COLUMNS} FROM currencies ORDER BY code");

        let rows: Vec<DbCurrency> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbCurrency::into_domain).collect())
    }

    async fn save(&self, currency: &Currency) -> Result<(), RepoError> {
        sqlx::query(r#"INSERT INTO currencies (id, code, full_name, sign) VALUES (?, ?, ?, ?)"#)
            .bind(self.ids.next_id().to_string())
            .bind(currency.code())
            .bind(currency.full_name())
            .bind(currency.sign())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(e, || format!("currency {} already stored", currency.code()))
            })?;

        Ok(())
    }
}

#[async_trait]
impl ExchangeRepository for SqliteRepo {
    async fn fetch_by_code(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Option<Exchange>, RepoError> {
        let sql = format!(
            "{} WHERE b.code = ? AND t.code = ?",
            exchange_select("e.rate")
        );

        let row: Option<DbExchange> = sqlx::query_as(&sql)
            .bind(base)
            .bind(target)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbExchange::into_domain).transpose()
    }

    async fn fetch_all(&self) -> Result<Vec<Exchange>, RepoError> {
        let sql = format!("{} ORDER BY b.code, t.code", exchange_select("e.rate"));

        let rows: Vec<DbExchange> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbExchange::into_domain).collect()
    }

    async fn save(&self, exchange: &Exchange) -> Result<(), RepoError> {
        let base = exchange.base().map(&CurrencyCodeMapper);
        let target = exchange.target().map(&CurrencyCodeMapper);

        sqlx::query(
            r#"INSERT INTO exchanges (id, base_currency_id, target_currency_id, rate)
               VALUES (?,
                       (SELECT id FROM currencies WHERE code = ?),
                       (SELECT id FROM currencies WHERE code = ?),
                       ?)"#,
        )
        .bind(self.ids.next_id().to_string())
        .bind(&base)
        .bind(&target)
        .bind(exchange.rate().to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || format!("exchange {} -> {} already stored", base, target))
        })?;

        Ok(())
    }

    async fn update(&self, exchange: &Exchange) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"UPDATE exchanges SET rate = ?
               WHERE base_currency_id = (SELECT id FROM currencies WHERE code = ?)
                 AND target_currency_id = (SELECT id FROM currencies WHERE code = ?)"#,
        )
        .bind(exchange.rate().to_string())
        .bind(exchange.base().map(&CurrencyCodeMapper))
        .bind(exchange.target().map(&CurrencyCodeMapper))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
