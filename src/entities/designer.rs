use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub mobile: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    /// Free-form availability as entered by the designer.
    pub availability: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::designer_work::Entity")]
    Works,
    #[sea_orm(has_many = "super::designer_hire_request::Entity")]
    HireRequests,
}

impl Related<super::designer_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Works.def()
    }
}

impl Related<super::designer_hire_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HireRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_available(&self) -> bool {
        self.availability
            .as_deref()
            .map(|a| a.trim().eq_ignore_ascii_case("available"))
            .unwrap_or(false)
    }
}
