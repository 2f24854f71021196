//! Bill persistence.
//!
//! Handlers only see [`BillStore`]; `main` wires in [`PgBillStore`] over the
//! connection pool and tests use [`InMemoryBillStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::bill::{Bill, BillChanges, NewBill};

pub use memory::InMemoryBillStore;
pub use postgres::PgBillStore;

#[async_trait]
pub trait BillStore: Send + Sync {
    /// Inserts a bill; the store assigns `bill_id` and `bill_date`.
    async fn insert(&self, bill: NewBill) -> Result<Bill, AppError>;

    /// All bills, newest `bill_date` first (ties by `bill_id` descending).
    async fn list(&self) -> Result<Vec<Bill>, AppError>;

    async fn get(&self, bill_id: i64) -> Result<Option<Bill>, AppError>;

    /// Merges `changes` into the row. `None` when no row matched.
    async fn update(&self, bill_id: i64, changes: BillChanges) -> Result<Option<Bill>, AppError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, bill_id: i64) -> Result<u64, AppError>;

    /// Cheap liveness probe used by `/health`.
    async fn ping(&self) -> Result<(), AppError>;
}
