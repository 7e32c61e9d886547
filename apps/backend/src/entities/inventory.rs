use sea_orm::entity::prelude::*;

/// One inventory document. Descriptive fields (name, price, supplier,
/// image URL...) live in `attributes` as a JSON object.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owner identifier
    pub email: String,
    pub quantity: i64,
    #[sea_orm(column_type = "Json")]
    pub attributes: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
