use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    entities::{seller, seller_bank_details, seller_business, seller_delivery_details},
    errors::ServiceError,
    events::{Event, EventSender},
};

use super::or_missing;

lazy_static! {
    /// `handle@provider`, ASCII letters, digits, `_`, `.` and `-` on either side.
    pub static ref UPI_ID_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+$").expect("UPI pattern compiles");
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerListItem {
    pub id: i32,
    pub owner_name: String,
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: String,
    /// VERIFIED or PENDING
    pub status: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerDetail {
    pub id: i32,
    pub status: String,
    pub is_verified: bool,
    pub seller: SellerProfile,
    #[schema(value_type = Option<seller_business::Model>)]
    pub business: Option<seller_business::Model>,
    #[schema(value_type = Option<seller_bank_details::Model>)]
    pub bank: Option<seller_bank_details::Model>,
    #[schema(value_type = Option<seller_delivery_details::Model>)]
    pub delivery: Option<seller_delivery_details::Model>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[validate(required)]
    pub is_verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerVerification {
    pub id: i32,
    pub is_verified: bool,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUpiRequest {
    #[validate(
        required,
        range(min = 1, message = "sellerId and upiId are required")
    )]
    pub seller_id: Option<i32>,
    #[validate(
        required,
        regex(path = "UPI_ID_PATTERN", message = "Invalid UPI format")
    )]
    pub upi_id: Option<String>,
}

#[derive(Clone)]
pub struct SellerService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl SellerService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// All sellers, newest first, with their business details.
    pub async fn list(&self) -> Result<Vec<SellerListItem>, ServiceError> {
        let sellers = seller::Entity::find()
            .find_also_related(seller_business::Entity)
            .order_by_desc(seller::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(sellers
            .into_iter()
            .map(|(s, business)| SellerListItem {
                id: s.id,
                status: s.verification_label().to_string(),
                owner_name: s.name,
                business_name: or_missing(business.as_ref().map(|b| b.business_name.as_str())),
                email: s.email,
                phone: s.phone,
                city: or_missing(business.as_ref().and_then(|b| b.city.as_deref())),
                joined_at: s.created_at,
            })
            .collect())
    }

    pub async fn detail(&self, id: i32) -> Result<SellerDetail, ServiceError> {
        let db = &*self.db;
        let seller = seller::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", id))?;

        let business = seller.find_related(seller_business::Entity).one(db).await?;
        let bank = seller
            .find_related(seller_bank_details::Entity)
            .one(db)
            .await?;
        let delivery = seller
            .find_related(seller_delivery_details::Entity)
            .one(db)
            .await?;

        Ok(SellerDetail {
            id: seller.id,
            status: seller.verification_label().to_string(),
            is_verified: seller.is_verified,
            seller: SellerProfile {
                name: seller.name,
                email: seller.email,
                phone: seller.phone,
                created_at: seller.created_at,
            },
            business,
            bank,
            delivery,
        })
    }

    pub async fn verify(&self, id: i32, is_verified: bool) -> Result<SellerVerification, ServiceError> {
        let result = seller::Entity::update_many()
            .col_expr(seller::Column::IsVerified, Expr::value(is_verified))
            .filter(seller::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Seller", id));
        }

        info!(seller_id = id, is_verified, "seller verification updated");
        self.event_sender
            .publish(Event::SellerVerificationChanged {
                seller_id: id,
                is_verified,
            })
            .await;

        Ok(SellerVerification {
            id,
            is_verified,
            status: if is_verified { "VERIFIED" } else { "PENDING" }.to_string(),
        })
    }

    /// Creates or replaces the seller's payout UPI id.
    pub async fn upsert_upi(
        &self,
        request: UpsertUpiRequest,
    ) -> Result<seller_bank_details::Model, ServiceError> {
        let (Some(seller_id), Some(upi_id)) = (request.seller_id, request.upi_id.clone()) else {
            return Err(ServiceError::ValidationError(
                "sellerId and upiId are required".to_string(),
            ));
        };
        request.validate()?;

        let db = &*self.db;
        if seller::Entity::find_by_id(seller_id).one(db).await?.is_none() {
            return Err(ServiceError::not_found("Seller", seller_id));
        }

        let existing = seller_bank_details::Entity::find()
            .filter(seller_bank_details::Column::SellerId.eq(seller_id))
            .one(db)
            .await?;

        let saved = match existing {
            Some(bank) => {
                let mut bank: seller_bank_details::ActiveModel = bank.into();
                bank.upi_id = Set(Some(upi_id));
                bank.update(db).await?
            }
            None => {
                seller_bank_details::ActiveModel {
                    seller_id: Set(seller_id),
                    upi_id: Set(Some(upi_id)),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };

        info!(seller_id, "seller UPI saved");
        Ok(saved)
    }

    /// Removes the seller's bank details row.
    pub async fn delete_upi(&self, seller_id: i32) -> Result<(), ServiceError> {
        let result = seller_bank_details::Entity::delete_many()
            .filter(seller_bank_details::Column::SellerId.eq(seller_id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Bank details for seller {} not found",
                seller_id
            )));
        }

        info!(seller_id, "seller UPI removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("seller@okaxis" ; "bank handle")]
    #[test_case("first.last-01@ybl" ; "dots and dashes")]
    #[test_case("under_score@upi.bank" ; "underscore and dotted provider")]
    fn accepts_valid_upi_ids(upi: &str) {
        assert!(UPI_ID_PATTERN.is_match(upi));
    }

    #[test_case("" ; "empty")]
    #[test_case("no-at-sign" ; "missing at")]
    #[test_case("@okaxis" ; "missing handle")]
    #[test_case("name@" ; "missing provider")]
    #[test_case("a@b@c" ; "two at signs")]
    #[test_case("with space@ok" ; "whitespace")]
    #[test_case("café@ok" ; "non ascii handle")]
    #[test_case("shop@bänk" ; "non ascii provider")]
    fn rejects_invalid_upi_ids(upi: &str) {
        assert!(!UPI_ID_PATTERN.is_match(upi));
    }

    #[test]
    fn upsert_request_requires_both_fields() {
        let request = UpsertUpiRequest {
            seller_id: None,
            upi_id: Some("a@b".into()),
        };
        assert!(request.validate().is_err());

        let request = UpsertUpiRequest {
            seller_id: Some(4),
            upi_id: None,
        };
        assert!(request.validate().is_err());

        let request = UpsertUpiRequest {
            seller_id: Some(4),
            upi_id: Some("shop@okicici".into()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn upsert_request_rejects_bad_format() {
        let request = UpsertUpiRequest {
            seller_id: Some(4),
            upi_id: Some("not a upi".into()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Invalid UPI format"));
    }
}
