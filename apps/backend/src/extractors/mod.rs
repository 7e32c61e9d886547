pub mod current_identity;
pub mod inventory_id;
pub mod validated_json;

pub use current_identity::CurrentIdentity;
pub use inventory_id::InventoryId;
pub use validated_json::ValidatedJson;
