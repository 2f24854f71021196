//! PostgreSQL pool construction and the bills table definition.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

// Amounts are stored as FLOAT8 so every f64 the API accepts round-trips unchanged
const CREATE_BILLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bills (
    bill_id        BIGSERIAL PRIMARY KEY,
    customer_name  TEXT,
    particular     TEXT,
    quantity       DOUBLE PRECISION NOT NULL DEFAULT 0,
    rate_incl_tax  DOUBLE PRECISION NOT NULL DEFAULT 0,
    total_amount   DOUBLE PRECISION NOT NULL DEFAULT 0,
    grand_total    DOUBLE PRECISION NOT NULL DEFAULT 0,
    payment_mode   TEXT,
    amount_paid    DOUBLE PRECISION NOT NULL DEFAULT 0,
    balance_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
    bill_date      TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .after_connect(|_conn, _meta| {
            Box::pin(async move {
                tracing::debug!("Opened new PostgreSQL connection");
                Ok(())
            })
        })
        .connect(&config.url)
        .await?;

    tracing::info!("Successfully connected to PostgreSQL");

    Ok(pool)
}

/// Creates the bills table when it does not exist yet. Existing tables are left alone.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BILLS_TABLE).execute(pool).await?;
    tracing::info!("bills table ready");
    Ok(())
}
