//! PgBillStore tests against a real database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use krishi_bills_backend::config::DatabaseConfig;
use krishi_bills_backend::database;
use krishi_bills_backend::models::bill::{BillChanges, NewBill};
use krishi_bills_backend::store::{BillStore, PgBillStore};

async fn store() -> PgBillStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
    let config = DatabaseConfig { url, max_connections: 2, auto_create_schema: true };
    let pool = database::create_pool(&config).await.expect("Failed to connect");
    database::ensure_schema(&pool).await.expect("Failed to create bills table");
    PgBillStore::new(pool)
}

fn fertilizer_bill(customer: &str) -> NewBill {
    NewBill {
        customer_name: Some(customer.to_string()),
        particular: Some("DAP 50kg".to_string()),
        quantity: 3.0,
        rate_incl_tax: 1350.0,
        total_amount: 4050.0,
        grand_total: 4050.0,
        payment_mode: Some("cash".to_string()),
        amount_paid: 4000.0,
        balance_amount: 50.0,
    }
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn insert_round_trips_values() {
    let store = store().await;
    let bill = store.insert(fertilizer_bill("pg-insert")).await.unwrap();

    assert!(bill.bill_id > 0);
    assert_eq!(bill.quantity, 3.0);
    assert_eq!(bill.grand_total, 4050.0);
    assert_eq!(bill.balance_amount, 50.0);

    store.delete(bill.bill_id).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn update_merges_and_delete_reports_rows() {
    let store = store().await;
    let bill = store.insert(fertilizer_bill("pg-update")).await.unwrap();

    let changes = BillChanges {
        amount_paid: Some(4050.0),
        balance_amount: Some(0.0),
        ..Default::default()
    };
    let updated = store.update(bill.bill_id, changes).await.unwrap().unwrap();
    assert_eq!(updated.amount_paid, 4050.0);
    assert_eq!(updated.balance_amount, 0.0);
    assert_eq!(updated.customer_name, bill.customer_name);
    assert_eq!(updated.bill_date, bill.bill_date);

    assert_eq!(store.delete(bill.bill_id).await.unwrap(), 1);
    assert_eq!(store.delete(bill.bill_id).await.unwrap(), 0);
    assert!(store.update(bill.bill_id, BillChanges::default()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn list_is_newest_first() {
    let store = store().await;
    let first = store.insert(fertilizer_bill("pg-list-1")).await.unwrap();
    let second = store.insert(fertilizer_bill("pg-list-2")).await.unwrap();

    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|b| b.bill_id).collect();
    let pos_first = ids.iter().position(|&id| id == first.bill_id).unwrap();
    let pos_second = ids.iter().position(|&id| id == second.bill_id).unwrap();
    assert!(pos_second < pos_first);

    store.delete(first.bill_id).await.unwrap();
    store.delete(second.bill_id).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL (DATABASE_URL)"]
async fn amounts_keep_every_decimal_and_large_values() {
    let store = store().await;
    let bill = NewBill {
        quantity: 0.125,
        rate_incl_tax: 10.005,
        total_amount: 1.2345678,
        grand_total: 1e10,
        amount_paid: 1e300,
        ..fertilizer_bill("pg-precision")
    };

    let stored = store.insert(bill).await.unwrap();
    assert_eq!(stored.quantity, 0.125);
    assert_eq!(stored.rate_incl_tax, 10.005);
    assert_eq!(stored.total_amount, 1.2345678);
    assert_eq!(stored.grand_total, 1e10);
    assert_eq!(stored.amount_paid, 1e300);

    let listed = store.get(stored.bill_id).await.unwrap().unwrap();
    assert_eq!(listed, stored);

    store.delete(stored.bill_id).await.unwrap();
}
