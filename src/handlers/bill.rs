// src/handlers/bill.rs
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use crate::dtos::bill::{BillEnvelope, CreateBillRequest, MessageResponse, UpdateBillRequest};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::bill::Bill;
use crate::state::AppState;
use crate::validate;

const BILL_NOT_FOUND: &str = "Bill not found";

// POST /add-bill - Create a bill
#[instrument(skip(state, payload))]
pub async fn create_bill(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBillRequest>,
) -> Result<(StatusCode, Json<BillEnvelope>), AppError> {
    let new_bill = validate::new_bill(payload, state.numeric_policy)?;
    let bill = state.store.insert(new_bill).await?;

    info!(bill_id = bill.bill_id, "Bill saved");

    Ok((
        StatusCode::CREATED,
        Json(BillEnvelope { message: "Bill saved successfully!", bill }),
    ))
}

// GET /bills - List all bills, newest first
#[instrument(skip(state))]
pub async fn list_bills(State(state): State<AppState>) -> Result<Json<Vec<Bill>>, AppError> {
    let bills = state.store.list().await?;
    Ok(Json(bills))
}

// GET /bills/{id} - Get single bill
#[instrument(skip(state))]
pub async fn get_bill(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Bill>, AppError> {
    let bill = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(BILL_NOT_FOUND))?;

    Ok(Json(bill))
}

// PUT /update-bill/{id} - Merge supplied fields into the bill
#[instrument(skip(state, payload))]
pub async fn update_bill(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateBillRequest>,
) -> Result<Json<BillEnvelope>, AppError> {
    let changes = validate::bill_changes(payload, state.numeric_policy)?;

    let bill = state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::not_found(BILL_NOT_FOUND))?;

    info!(bill_id = bill.bill_id, "Bill updated");

    Ok(Json(BillEnvelope { message: "Bill updated successfully!", bill }))
}

// DELETE /delete-bill/{id} - Delete bill
#[instrument(skip(state))]
pub async fn delete_bill(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if state.store.delete(id).await? == 0 {
        return Err(AppError::not_found(BILL_NOT_FOUND));
    }

    info!(bill_id = id, "Bill deleted");

    Ok(Json(MessageResponse { message: "Bill deleted successfully!" }))
}

// GET /health - Store reachability
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}
