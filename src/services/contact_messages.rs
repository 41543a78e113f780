use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, LikeExpr},
    Condition, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;

use crate::{
    entities::contact_message::{self, Column},
    errors::ServiceError,
};

#[derive(Clone)]
pub struct ContactMessageService {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Messages, newest first. A non-blank `search` keeps only messages whose
    /// name, email or body contains it, ignoring case.
    ///
    /// SQLite only folds ASCII case in `LIKE`/`LOWER()`, so outside Postgres
    /// the match runs on the loaded rows with Unicode lower-casing.
    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<contact_message::Model>, ServiceError> {
        let db = &*self.db;
        let query = contact_message::Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let Some(term) = normalize_search(search) else {
            return Ok(query.all(db).await?);
        };

        if db.get_database_backend() == DbBackend::Postgres {
            let pattern = format!("%{}%", escape_like(&term));
            let contains = |column: Column| {
                Expr::col(column).ilike(LikeExpr::new(pattern.clone()).escape('\\'))
            };
            return Ok(query
                .filter(
                    Condition::any()
                        .add(contains(Column::Name))
                        .add(contains(Column::Email))
                        .add(contains(Column::Message)),
                )
                .all(db)
                .await?);
        }

        let messages = query.all(db).await?;
        Ok(messages
            .into_iter()
            .filter(|message| matches_search(message, &term))
            .collect())
    }
}

/// `term` must already be lower-cased.
fn matches_search(message: &contact_message::Model, term: &str) -> bool {
    [&message.name, &message.email, &message.message]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Trims and lower-cases the search term; blank means no filter.
fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Matches `%` and `_` literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_means_no_filter() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("   ")), None);
    }

    #[test]
    fn search_is_trimmed_and_lowercased() {
        assert_eq!(normalize_search(Some("  Refund ")), Some("refund".to_string()));
    }

    fn message(name: &str, email: &str, body: &str) -> contact_message::Model {
        contact_message::Model {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn matching_folds_non_ascii_case() {
        let m = message("ÉLODIE Marchand", "elodie@mail.test", "Bonjour");
        for search in ["ÉLODIE", "élodie", "Élodie"] {
            let term = normalize_search(Some(search)).expect("term");
            assert!(matches_search(&m, &term), "{search} should match");
        }
    }

    #[test]
    fn matching_checks_every_field() {
        let m = message("Omar", "omar@mail.test", "Parcel arrived damaged");
        assert!(matches_search(&m, "omar"));
        assert!(matches_search(&m, "mail.test"));
        assert!(matches_search(&m, "damaged"));
        assert!(!matches_search(&m, "refund"));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }
}
