// src/store/postgres.rs
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::BillStore;
use crate::error::AppError;
use crate::models::bill::{Bill, BillChanges, NewBill};

// Tables created with NUMERIC amount columns still decode into f64
const BILL_COLUMNS: &str = "bill_id, customer_name, particular,
        quantity::FLOAT8       AS quantity,
        rate_incl_tax::FLOAT8  AS rate_incl_tax,
        total_amount::FLOAT8   AS total_amount,
        grand_total::FLOAT8    AS grand_total,
        payment_mode,
        amount_paid::FLOAT8    AS amount_paid,
        balance_amount::FLOAT8 AS balance_amount,
        bill_date";

/// Bill store backed by the shared Postgres pool.
#[derive(Clone)]
pub struct PgBillStore {
    db_pool: PgPool,
}

impl PgBillStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BillStore for PgBillStore {
    #[instrument(skip(self, bill))]
    async fn insert(&self, bill: NewBill) -> Result<Bill, AppError> {
        let sql = format!(
            "INSERT INTO bills
             (customer_name, particular, quantity, rate_incl_tax, total_amount,
              grand_total, payment_mode, amount_paid, balance_amount, bill_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
             RETURNING {BILL_COLUMNS}"
        );

        let bill = sqlx::query_as::<_, Bill>(&sql)
            .bind(bill.customer_name)
            .bind(bill.particular)
            .bind(bill.quantity)
            .bind(bill.rate_incl_tax)
            .bind(bill.total_amount)
            .bind(bill.grand_total)
            .bind(bill.payment_mode)
            .bind(bill.amount_paid)
            .bind(bill.balance_amount)
            .fetch_one(&self.db_pool)
            .await?;

        Ok(bill)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let sql = format!("SELECT {BILL_COLUMNS} FROM bills ORDER BY bill_date DESC, bill_id DESC");

        let bills = sqlx::query_as::<_, Bill>(&sql)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(bills)
    }

    #[instrument(skip(self))]
    async fn get(&self, bill_id: i64) -> Result<Option<Bill>, AppError> {
        let sql = format!("SELECT {BILL_COLUMNS} FROM bills WHERE bill_id = $1");

        let bill = sqlx::query_as::<_, Bill>(&sql)
            .bind(bill_id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(bill)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, bill_id: i64, changes: BillChanges) -> Result<Option<Bill>, AppError> {
        let sql = format!(
            "UPDATE bills SET
             customer_name  = COALESCE($1, customer_name),
             particular     = COALESCE($2, particular),
             quantity       = COALESCE($3, quantity),
             rate_incl_tax  = COALESCE($4, rate_incl_tax),
             total_amount   = COALESCE($5, total_amount),
             grand_total    = COALESCE($6, grand_total),
             payment_mode   = COALESCE($7, payment_mode),
             amount_paid    = COALESCE($8, amount_paid),
             balance_amount = COALESCE($9, balance_amount)
             WHERE bill_id = $10
             RETURNING {BILL_COLUMNS}"
        );

        let bill = sqlx::query_as::<_, Bill>(&sql)
            .bind(changes.customer_name)
            .bind(changes.particular)
            .bind(changes.quantity)
            .bind(changes.rate_incl_tax)
            .bind(changes.total_amount)
            .bind(changes.grand_total)
            .bind(changes.payment_mode)
            .bind(changes.amount_paid)
            .bind(changes.balance_amount)
            .bind(bill_id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(bill)
    }

    #[instrument(skip(self))]
    async fn delete(&self, bill_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM bills WHERE bill_id = $1")
            .bind(bill_id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }
}
