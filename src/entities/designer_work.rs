use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One portfolio piece uploaded by a designer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "designer_works")]
#[serde(rename_all = "camelCase")]
#[schema(as = DesignerWork)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(skip)]
    pub designer_id: i32,
    /// Image URL or upload path.
    pub image: String,
    pub description: Option<String>,
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
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
