// src/dtos/bill.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::bill::Bill;

/// Body of `POST /add-bill`. Every field stays raw JSON until
/// `validate` has resolved it into text or a number.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBillRequest {
    pub customer_name: Option<Value>,
    pub particular: Option<Value>,
    pub quantity: Option<Value>,
    pub rate_incl_tax: Option<Value>,
    pub total_amount: Option<Value>,
    pub grand_total: Option<Value>,
    pub payment_mode: Option<Value>,
    pub amount_paid: Option<Value>,
    pub balance_amount: Option<Value>,
}

/// Body of `PUT /update-bill/{id}`. Absent or null fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBillRequest {
    pub customer_name: Option<Value>,
    pub particular: Option<Value>,
    pub quantity: Option<Value>,
    pub rate_incl_tax: Option<Value>,
    pub total_amount: Option<Value>,
    pub grand_total: Option<Value>,
    pub payment_mode: Option<Value>,
    pub amount_paid: Option<Value>,
    pub balance_amount: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct BillEnvelope {
    pub message: &'static str,
    pub bill: Bill,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
