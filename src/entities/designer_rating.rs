use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client rating for a finished hire request. At most one per request.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designer_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub hire_request_id: i32,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::designer_hire_request::Entity",
        from = "Column::HireRequestId",
        to = "super::designer_hire_request::Column::Id",
        on_delete = "Cascade"
    )]
    HireRequest,
}

impl Related<super::designer_hire_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HireRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
