use axum::{
    routing::{delete, get, post, put},
    Router,
};
use crate::handlers::bill::{create_bill, delete_bill, get_bill, list_bills, update_bill};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-bill", post(create_bill))
        .route("/bills", get(list_bills))
        .route("/bills/{id}", get(get_bill))
        .route("/update-bill/{id}", put(update_bill))
        .route("/delete-bill/{id}", delete(delete_bill))
}
