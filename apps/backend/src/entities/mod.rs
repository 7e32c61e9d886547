pub mod inventory;

pub use inventory::Entity as Inventory;
pub use inventory::Model as InventoryModel;
