//! Assessment response entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One submitted assessment. Rows are insert-only; nothing updates or
/// deletes them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub knowledge: i32,
    pub awareness: i32,
    pub practice: i32,
    pub submitted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
