//! SeaORM adapter for the inventory collection.
//!
//! Functions return raw `DbErr`; the repository layer maps them.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde_json::Value;

use crate::entities::inventory;

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<inventory::Model>, DbErr> {
    inventory::Entity::find()
        .order_by_asc(inventory::Column::Id)
        .all(conn)
        .await
}

pub async fn find_limited<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
) -> Result<Vec<inventory::Model>, DbErr> {
    inventory::Entity::find()
        .order_by_asc(inventory::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn find_by_owner<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Vec<inventory::Model>, DbErr> {
    inventory::Entity::find()
        .filter(inventory::Column::Email.eq(email))
        .order_by_asc(inventory::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<inventory::Model>, DbErr> {
    inventory::Entity::find_by_id(id).one(conn).await
}

/// `UPDATE inventory SET quantity = quantity + delta WHERE id = ?`
///
/// Returns the number of rows touched (0 when the id doesn't exist).
pub async fn increment_quantity<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    delta: i64,
) -> Result<u64, DbErr> {
    let result = inventory::Entity::update_many()
        .col_expr(
            inventory::Column::Quantity,
            Expr::col(inventory::Column::Quantity).add(delta),
        )
        .filter(inventory::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
    let result = inventory::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    quantity: i64,
    attributes: Value,
) -> Result<inventory::Model, DbErr> {
    inventory::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        quantity: Set(quantity),
        attributes: Set(attributes),
    }
    .insert(conn)
    .await
}
