//! Database adapters. Only SeaORM today.

pub mod inventory_sea;
