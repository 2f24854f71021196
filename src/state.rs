use std::sync::Arc;

use crate::store::BillStore;
use crate::validate::NumericPolicy;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BillStore>,
    pub numeric_policy: NumericPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn BillStore>, numeric_policy: NumericPolicy) -> Self {
        Self { store, numeric_policy }
    }
}
