use serde::Serialize;
use sqlx::FromRow;
use chrono::{DateTime, Utc};

/// A persisted sales bill. `bill_id` and `bill_date` are assigned by the store.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Bill {
    pub bill_id: i64,
    pub customer_name: Option<String>,
    pub particular: Option<String>,
    pub quantity: f64,
    pub rate_incl_tax: f64,
    pub total_amount: f64,
    pub grand_total: f64,
    pub payment_mode: Option<String>,
    pub amount_paid: f64,
    pub balance_amount: f64,
    pub bill_date: DateTime<Utc>,
}

/// Fully resolved values for an insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBill {
    pub customer_name: Option<String>,
    pub particular: Option<String>,
    pub quantity: f64,
    pub rate_incl_tax: f64,
    pub total_amount: f64,
    pub grand_total: f64,
    pub payment_mode: Option<String>,
    pub amount_paid: f64,
    pub balance_amount: f64,
}

/// Keep-if-absent update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillChanges {
    pub customer_name: Option<String>,
    pub particular: Option<String>,
    pub quantity: Option<f64>,
    pub rate_incl_tax: Option<f64>,
    pub total_amount: Option<f64>,
    pub grand_total: Option<f64>,
    pub payment_mode: Option<String>,
    pub amount_paid: Option<f64>,
    pub balance_amount: Option<f64>,
}

impl Bill {
    pub fn apply(&mut self, changes: BillChanges) {
        if let Some(v) = changes.customer_name { self.customer_name = Some(v); }
        if let Some(v) = changes.particular { self.particular = Some(v); }
        if let Some(v) = changes.quantity { self.quantity = v; }
        if let Some(v) = changes.rate_incl_tax { self.rate_incl_tax = v; }
        if let Some(v) = changes.total_amount { self.total_amount = v; }
        if let Some(v) = changes.grand_total { self.grand_total = v; }
        if let Some(v) = changes.payment_mode { self.payment_mode = Some(v); }
        if let Some(v) = changes.amount_paid { self.amount_paid = v; }
        if let Some(v) = changes.balance_amount { self.balance_amount = v; }
    }
}
