//! Inventory access layer.
//!
//! Typed records over the `inventory` collection. Every operation is a
//! single-document atomic call; quantity changes run as one
//! `quantity = quantity + delta` update so concurrent adjustments are not lost.

use sea_orm::{ConnectionTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapters::inventory_sea as adapter;
use crate::entities::inventory;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// How many records the featured listing returns.
pub const FEATURED_LIMIT: u64 = 6;

/// Top-level keys owned by the record itself; never stored as attributes.
const RECORD_FIELDS: [&str; 3] = ["_id", "email", "quantity"];

/// Wire shape of a stored record: fixed fields plus flattened attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "_id")]
    pub id: i32,
    pub email: String,
    pub quantity: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Body of `POST /inventories/add`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewInventoryRecord {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NewInventoryRecord {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity must not be negative, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// Body of `PUT /restock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RestockRequest {
    pub quantity: i64,
}

impl RestockRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "restock quantity must be positive, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

fn strip_record_fields(mut attributes: Map<String, Value>) -> Map<String, Value> {
    for key in RECORD_FIELDS {
        attributes.remove(key);
    }
    attributes
}

impl TryFrom<inventory::Model> for InventoryRecord {
    type Error = DomainError;

    fn try_from(model: inventory::Model) -> Result<Self, Self::Error> {
        let attributes = match model.attributes {
            Value::Object(map) => strip_record_fields(map),
            Value::Null => Map::new(),
            other => {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "attributes of inventory {} is not an object: {}",
                        model.id,
                        json_kind(&other)
                    ),
                ))
            }
        };

        Ok(Self {
            id: model.id,
            email: model.email,
            quantity: model.quantity,
            attributes,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn to_records(models: Vec<inventory::Model>) -> Result<Vec<InventoryRecord>, DomainError> {
    models.into_iter().map(InventoryRecord::try_from).collect()
}

fn inventory_not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Inventory, format!("Inventory {id} not found"))
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<InventoryRecord>, DomainError> {
    to_records(adapter::find_all(conn).await.map_err(map_db_err)?)
}

pub async fn find_limited<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
) -> Result<Vec<InventoryRecord>, DomainError> {
    to_records(adapter::find_limited(conn, limit).await.map_err(map_db_err)?)
}

/// Records whose owner email matches exactly.
pub async fn find_by_owner<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Vec<InventoryRecord>, DomainError> {
    to_records(adapter::find_by_owner(conn, email).await.map_err(map_db_err)?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<InventoryRecord>, DomainError> {
    adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?
        .map(InventoryRecord::try_from)
        .transpose()
}

/// Add `delta` (possibly negative) to the quantity and return the record
/// as it is after the update.
pub async fn increment_quantity<C: TransactionTrait>(
    conn: &C,
    id: i32,
    delta: i64,
) -> Result<InventoryRecord, DomainError> {
    let txn = conn.begin().await.map_err(map_db_err)?;

    let touched = adapter::increment_quantity(&txn, id, delta)
        .await
        .map_err(map_db_err)?;
    if touched == 0 {
        txn.rollback().await.map_err(map_db_err)?;
        return Err(inventory_not_found(id));
    }

    let updated = adapter::find_by_id(&txn, id)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| inventory_not_found(id))?;

    txn.commit().await.map_err(map_db_err)?;
    InventoryRecord::try_from(updated)
}

/// Delete one record; returns how many were removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DomainError> {
    adapter::delete_by_id(conn, id).await.map_err(map_db_err)
}

/// Store a new record and return its id. A client-supplied `_id` is ignored.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    record: NewInventoryRecord,
) -> Result<i32, DomainError> {
    record.validate()?;

    let attributes = Value::Object(strip_record_fields(record.attributes));
    let model = adapter::insert(conn, &record.email, record.quantity, attributes)
        .await
        .map_err(map_db_err)?;
    Ok(model.id)
}
