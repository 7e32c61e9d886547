//! Repository layer: typed operations over adapters.

pub mod inventory;
