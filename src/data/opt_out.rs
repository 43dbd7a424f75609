use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for opt-out membership lookups.
///
/// The core only reads this table; adding and removing users is owned by an admin
/// command elsewhere.
pub struct OptOutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OptOutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user tag is in the opt-out set.
    ///
    /// Uses the unique index on `user_tag`.
    ///
    /// # Arguments
    /// - `user_tag` - Discord username to look up
    ///
    /// # Returns
    /// - `Ok(true)` - The user has opted out
    /// - `Ok(false)` - The user has not opted out
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_opted_out(&self, user_tag: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::OptOut::find()
            .filter(entity::opt_out::Column::UserTag.eq(user_tag))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }
}
