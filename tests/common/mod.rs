#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use krishi_bills_backend::error::AppError;
use krishi_bills_backend::models::bill::{Bill, BillChanges, NewBill};
use krishi_bills_backend::store::{BillStore, InMemoryBillStore};
use krishi_bills_backend::validate::NumericPolicy;
use krishi_bills_backend::{build_app, AppState};
use serde_json::Value;
use tower::util::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "https://shop.example.com";

/// Store whose every call fails the way an unreachable database does.
pub struct FailingBillStore;

fn pool_timeout() -> AppError {
    AppError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl BillStore for FailingBillStore {
    async fn insert(&self, _bill: NewBill) -> Result<Bill, AppError> {
        Err(pool_timeout())
    }

    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        Err(pool_timeout())
    }

    async fn get(&self, _bill_id: i64) -> Result<Option<Bill>, AppError> {
        Err(pool_timeout())
    }

    async fn update(&self, _bill_id: i64, _changes: BillChanges) -> Result<Option<Bill>, AppError> {
        Err(pool_timeout())
    }

    async fn delete(&self, _bill_id: i64) -> Result<u64, AppError> {
        Err(pool_timeout())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(pool_timeout())
    }
}

/// Router wired to an in-memory store that the test can inspect directly.
pub struct TestApp {
    pub router: Router,
    pub store: InMemoryBillStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(NumericPolicy::Coerce)
    }

    pub fn with_policy(policy: NumericPolicy) -> Self {
        let store = InMemoryBillStore::new();
        let state = AppState::new(Arc::new(store.clone()), policy);
        let router = build_app(state, &[ALLOWED_ORIGIN.to_string()]);
        Self { router, store }
    }

    /// Router backed by [`FailingBillStore`].
    pub fn failing() -> Router {
        let state = AppState::new(Arc::new(FailingBillStore), NumericPolicy::Coerce);
        build_app(state, &[ALLOWED_ORIGIN.to_string()])
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, body).await
    }

    /// Sends `body` verbatim, with a JSON content type only when `json_content_type` is set.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        body: &'static str,
        json_content_type: bool,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if json_content_type {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder.body(Body::from(body)).unwrap();
        read(&self.router, request).await
    }

    pub async fn add_bill(&self, body: Value) -> Value {
        let (status, json) = self.request(Method::POST, "/add-bill", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
        json["bill"].clone()
    }

    pub async fn list(&self) -> Vec<Value> {
        let (status, json) = self.request(Method::GET, "/bills", None).await;
        assert_eq!(status, StatusCode::OK);
        json.as_array().cloned().expect("list returns an array")
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    read(router, request).await
}

/// Runs the request and decodes the body as JSON, falling back to a JSON string for plain text.
async fn read(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}
