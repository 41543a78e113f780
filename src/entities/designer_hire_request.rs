use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A client's request to hire a designer. Status is free text set by the
/// designer app (`pending`, `accepted`, `completed`, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designer_hire_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub designer_id: i32,
    pub full_name: String,
    pub work_type: String,
    pub budget: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::designer::Entity",
        from = "Column::DesignerId",
        to = "super::designer::Column::Id",
        on_delete = "Cascade"
    )]
    Designer,
    #[sea_orm(has_one = "super::designer_rating::Entity")]
    Rating,
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl Related<super::designer_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
