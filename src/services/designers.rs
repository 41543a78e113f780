use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::{
    entities::{designer, designer_hire_request, designer_rating, designer_work},
    errors::ServiceError,
    events::{Event, EventSender},
};

use super::or_missing;

/// Every designer is on the free plan until billing exists.
const SUBSCRIPTION_FREE: &str = "FREE";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerListItem {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience: String,
    /// AVAILABLE or UNAVAILABLE
    pub availability: String,
    pub subscription_status: String,
    /// ACTIVE once verified, PENDING otherwise
    pub status: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<designer::Model> for DesignerListItem {
    fn from(d: designer::Model) -> Self {
        Self {
            id: d.id,
            availability: if d.is_available() {
                "AVAILABLE"
            } else {
                "UNAVAILABLE"
            }
            .to_string(),
            status: designer_status(d.is_verified).to_string(),
            phone: or_missing(d.mobile.as_deref()),
            location: or_missing(d.location.as_deref()),
            experience: or_missing(d.experience.as_deref()),
            subscription_status: SUBSCRIPTION_FREE.to_string(),
            fullname: d.fullname,
            email: d.email,
            is_verified: d.is_verified,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerVerification {
    pub id: i32,
    pub is_verified: bool,
    pub status: String,
}

/// Header block of the work-history page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerSummary {
    pub fullname: String,
    pub email: String,
    pub location: String,
    pub experience: String,
    /// As entered by the designer, UNAVAILABLE when blank.
    pub availability: String,
}

impl From<&designer::Model> for DesignerSummary {
    fn from(d: &designer::Model) -> Self {
        Self {
            fullname: d.fullname.clone(),
            email: d.email.clone(),
            location: or_missing(d.location.as_deref()),
            experience: or_missing(d.experience.as_deref()),
            availability: d
                .availability
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .unwrap_or("UNAVAILABLE")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistoryItem {
    pub id: i32,
    pub client_name: String,
    pub work_type: String,
    #[schema(value_type = Option<String>, example = "45000.00")]
    pub budget: Option<Decimal>,
    pub status: String,
    /// Stars from the client's rating, if the project was rated.
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<(designer_hire_request::Model, Option<designer_rating::Model>)> for ProjectHistoryItem {
    fn from((hire, rating): (designer_hire_request::Model, Option<designer_rating::Model>)) -> Self {
        Self {
            id: hire.id,
            client_name: hire.full_name,
            work_type: hire.work_type,
            budget: hire.budget,
            status: hire.status,
            rating: rating.map(|r| r.stars),
            created_at: hire.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignerWorkHistory {
    pub designer: DesignerSummary,
    /// Newest first.
    #[schema(value_type = Vec<designer_work::Model>)]
    pub portfolio_works: Vec<designer_work::Model>,
    /// Newest first.
    pub project_history: Vec<ProjectHistoryItem>,
}

fn designer_status(is_verified: bool) -> &'static str {
    if is_verified {
        "ACTIVE"
    } else {
        "PENDING"
    }
}

#[derive(Clone)]
pub struct DesignerService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl DesignerService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    pub async fn list(&self) -> Result<Vec<DesignerListItem>, ServiceError> {
        let designers = designer::Entity::find()
            .order_by_desc(designer::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(designers.into_iter().map(DesignerListItem::from).collect())
    }

    /// Portfolio and hire history for one designer.
    pub async fn work_history(&self, id: i32) -> Result<DesignerWorkHistory, ServiceError> {
        let db = &*self.db;
        let designer = designer::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Designer", id))?;

        let portfolio_works = designer
            .find_related(designer_work::Entity)
            .order_by_desc(designer_work::Column::CreatedAt)
            .order_by_desc(designer_work::Column::Id)
            .all(db)
            .await?;

        let project_history = designer_hire_request::Entity::find()
            .filter(designer_hire_request::Column::DesignerId.eq(id))
            .find_also_related(designer_rating::Entity)
            .order_by_desc(designer_hire_request::Column::CreatedAt)
            .order_by_desc(designer_hire_request::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(ProjectHistoryItem::from)
            .collect();

        Ok(DesignerWorkHistory {
            designer: DesignerSummary::from(&designer),
            portfolio_works,
            project_history,
        })
    }

    pub async fn verify(
        &self,
        id: i32,
        is_verified: bool,
    ) -> Result<DesignerVerification, ServiceError> {
        let result = designer::Entity::update_many()
            .col_expr(designer::Column::IsVerified, Expr::value(is_verified))
            .filter(designer::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Designer", id));
        }

        info!(designer_id = id, is_verified, "designer verification updated");
        self.event_sender
            .publish(Event::DesignerVerificationChanged {
                designer_id: id,
                is_verified,
            })
            .await;

        Ok(DesignerVerification {
            id,
            is_verified,
            status: designer_status(is_verified).to_string(),
        })
    }
}
