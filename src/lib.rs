//! Sales bill backend for the Sri Dongardevi Krishi Kendra shop.
//!
//! One `bills` table behind a small axum API: create, list, update and
//! delete bills. Storage is reached through [`store::BillStore`] so the
//! Postgres pool can be swapped for the in-memory table in tests.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

pub use routes::build_app;
pub use state::AppState;
