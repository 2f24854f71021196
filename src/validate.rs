//! Input handling for bill bodies.
//!
//! Every field arrives as raw JSON. Text columns take any scalar in its
//! string form. For numeric columns a [`NumericPolicy`] decides what happens
//! to values that are present but not numbers: `Coerce` stores 0, `Strict`
//! rejects the request with a 400.

use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::dtos::bill::{CreateBillRequest, UpdateBillRequest};
use crate::error::AppError;
use crate::models::bill::{BillChanges, NewBill};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    #[default]
    Coerce,
    Strict,
}

impl FromStr for NumericPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coerce" => Ok(NumericPolicy::Coerce),
            "strict" => Ok(NumericPolicy::Strict),
            other => Err(format!(
                "unknown numeric policy '{other}' (expected 'coerce' or 'strict')"
            )),
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Resolves one numeric field. `Ok(None)` means the field was absent or null.
pub fn numeric_field(
    field: &str,
    raw: Option<&Value>,
    policy: NumericPolicy,
) -> Result<Option<f64>, AppError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    match (as_number(value), policy) {
        (Some(n), _) => Ok(Some(n)),
        (None, NumericPolicy::Coerce) => {
            debug!(field, %value, "Non-numeric value coerced to 0");
            Ok(Some(0.0))
        }
        (None, NumericPolicy::Strict) => {
            Err(AppError::validation(format!("{field} must be a number")))
        }
    }
}

/// Resolves one text field. Numbers and booleans keep their JSON spelling;
/// arrays and objects are rejected under both policies.
pub fn text_field(field: &str, raw: Option<Value>) -> Result<Option<String>, AppError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(_) => Err(AppError::validation(format!("{field} must be text"))),
    }
}

pub fn new_bill(req: CreateBillRequest, policy: NumericPolicy) -> Result<NewBill, AppError> {
    let num = |field: &str, raw: &Option<Value>| {
        numeric_field(field, raw.as_ref(), policy).map(|v| v.unwrap_or(0.0))
    };

    Ok(NewBill {
        quantity: num("quantity", &req.quantity)?,
        rate_incl_tax: num("rate_incl_tax", &req.rate_incl_tax)?,
        total_amount: num("total_amount", &req.total_amount)?,
        grand_total: num("grand_total", &req.grand_total)?,
        amount_paid: num("amount_paid", &req.amount_paid)?,
        balance_amount: num("balance_amount", &req.balance_amount)?,
        customer_name: text_field("customer_name", req.customer_name)?,
        particular: text_field("particular", req.particular)?,
        payment_mode: text_field("payment_mode", req.payment_mode)?,
    })
}

pub fn bill_changes(
    req: UpdateBillRequest,
    policy: NumericPolicy,
) -> Result<BillChanges, AppError> {
    let num = |field: &str, raw: &Option<Value>| numeric_field(field, raw.as_ref(), policy);

    Ok(BillChanges {
        quantity: num("quantity", &req.quantity)?,
        rate_incl_tax: num("rate_incl_tax", &req.rate_incl_tax)?,
        total_amount: num("total_amount", &req.total_amount)?,
        grand_total: num("grand_total", &req.grand_total)?,
        amount_paid: num("amount_paid", &req.amount_paid)?,
        balance_amount: num("balance_amount", &req.balance_amount)?,
        customer_name: text_field("customer_name", req.customer_name)?,
        particular: text_field("particular", req.particular)?,
        payment_mode: text_field("payment_mode", req.payment_mode)?,
    })
}
