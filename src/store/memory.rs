//! In-memory implementation of BillStore for tests and local development

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::BillStore;
use crate::error::AppError;
use crate::models::bill::{Bill, BillChanges, NewBill};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Bill>,
}

/// Thread-safe bill table kept in process memory.
#[derive(Clone, Default)]
pub struct InMemoryBillStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(e: impl std::fmt::Display) -> AppError {
    AppError::internal(format!("bill table lock poisoned: {e}"))
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn insert(&self, bill: NewBill) -> Result<Bill, AppError> {
        let mut table = self.table.write().map_err(lock_error)?;

        table.next_id += 1;
        let stored = Bill {
            bill_id: table.next_id,
            customer_name: bill.customer_name,
            particular: bill.particular,
            quantity: bill.quantity,
            rate_incl_tax: bill.rate_incl_tax,
            total_amount: bill.total_amount,
            grand_total: bill.grand_total,
            payment_mode: bill.payment_mode,
            amount_paid: bill.amount_paid,
            balance_amount: bill.balance_amount,
            bill_date: Utc::now(),
        };
        table.rows.insert(stored.bill_id, stored.clone());

        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let table = self.table.read().map_err(lock_error)?;

        let mut bills: Vec<Bill> = table.rows.values().cloned().collect();
        bills.sort_by(|a, b| {
            b.bill_date
                .cmp(&a.bill_date)
                .then_with(|| b.bill_id.cmp(&a.bill_id))
        });

        Ok(bills)
    }

    async fn get(&self, bill_id: i64) -> Result<Option<Bill>, AppError> {
        let table = self.table.read().map_err(lock_error)?;
        Ok(table.rows.get(&bill_id).cloned())
    }

    async fn update(&self, bill_id: i64, changes: BillChanges) -> Result<Option<Bill>, AppError> {
        let mut table = self.table.write().map_err(lock_error)?;

        Ok(table.rows.get_mut(&bill_id).map(|bill| {
            bill.apply(changes);
            bill.clone()
        }))
    }

    async fn delete(&self, bill_id: i64) -> Result<u64, AppError> {
        let mut table = self.table.write().map_err(lock_error)?;
        Ok(table.rows.remove(&bill_id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.table.read().map(|_| ()).map_err(lock_error)
    }
}
