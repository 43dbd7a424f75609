//! Opt-out factory for creating opted-out users.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating opt-out rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::opt_out::OptOutFactory;
///
/// let opt_out = OptOutFactory::new(&db)
///     .user_tag("quiet_user")
///     .build()
///     .await?;
/// ```
pub struct OptOutFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    user_tag: String,
}

impl<'a> OptOutFactory<'a> {
    /// Creates a new OptOutFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented snowflake
    /// - user_tag: `"user_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            user_tag: format!("user_{}", id),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn user_tag(mut self, user_tag: impl Into<String>) -> Self {
        self.user_tag = user_tag.into();
        self
    }

    /// Builds and inserts the opt-out entity into the database.
    pub async fn build(self) -> Result<entity::opt_out::Model, DbErr> {
        entity::opt_out::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_tag: ActiveValue::Set(self.user_tag),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an opt-out row with default values.
pub async fn create_opt_out(db: &DatabaseConnection) -> Result<entity::opt_out::Model, DbErr> {
    OptOutFactory::new(db).build().await
}
