use inventory_backend::repos::inventory::{self, NewInventoryRecord};
use inventory_backend::state::app_state::AppState;
use serde_json::json;

/// Insert a record owned by `email` and return its id.
pub async fn seed_item(state: &AppState, email: &str, quantity: i64, item_name: &str) -> i32 {
    let record: NewInventoryRecord = serde_json::from_value(json!({
        "email": email,
        "quantity": quantity,
        "itemName": item_name,
        "price": 19.99,
        "supplier": "Acme",
    }))
    .expect("valid record");

    let db = state.db().expect("test state has a database");
    inventory::insert(db, record)
        .await
        .expect("seed insert should succeed")
}
