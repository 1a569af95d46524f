//! PostgreSQL repository adapter.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use exchange_types::{
    Currency, CurrencyCodeMapper, CurrencyRepository, Exchange, ExchangeRepository, IdSource,
    RandomIds, RepoError,
};

use crate::types::{CURRENCY_COLUMNS, DbCurrency, DbExchange, exchange_select, map_write_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository. Rates are stored as `NUMERIC`.
pub struct PostgresRepo {
    pool: PgPool,
    ids: Arc<dyn IdSource>,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        Self::with_ids(database_url, Arc::new(RandomIds)).await
    }

    /// Creates a new PostgreSQL repository keying rows with ids from `ids`.
    pub async fn with_ids(database_url: &str, ids: Arc<dyn IdSource>) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_catalog_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool, ids })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for PostgresRepo {
    async fn fetch_by_code(&self, code: &str) -> Result<Option<Currency>, RepoError> {
        let sql = format!("SELECT {CURRENCY_COLUMNS} FROM currencies WHERE code = $1");

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
        sqlx::query(r#"INSERT INTO currencies (id, code, full_name, sign) VALUES ($1, $2, $3, $4)"#)
            .bind(self.ids.next_id())
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
impl ExchangeRepository for PostgresRepo {
    async fn fetch_by_code(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Option<Exchange>, RepoError> {
        let sql = format!(
            "{} WHERE b.code = $1 AND t.code = $2",
            exchange_select("e.rate::TEXT")
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
        let sql = format!(
            "{} ORDER BY b.code, t.code",
            exchange_select("e.rate::TEXT")
        );

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
               VALUES ($1,
                       (SELECT id FROM currencies WHERE code = $2),
                       (SELECT id FROM currencies WHERE code = $3),
                       $4::NUMERIC)"#,
        )
        .bind(self.ids.next_id())
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
            r#"UPDATE exchanges SET rate = $1::NUMERIC
               WHERE base_currency_id = (SELECT id FROM currencies WHERE code = $2)
                 AND target_currency_id = (SELECT id FROM currencies WHERE code = $3)"#,
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
