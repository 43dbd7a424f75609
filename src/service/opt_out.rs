//! Opt-out gate.

use sea_orm::DatabaseConnection;

use crate::data::opt_out::OptOutRepository;

/// Read-only membership test against the opt-out set.
pub struct OptOutGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OptOutGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether autonomous engagement with this user is suppressed.
    ///
    /// A storage error is logged and the user is treated as absent from the set.
    pub async fn is_suppressed(&self, user_tag: &str) -> bool {
        match OptOutRepository::new(self.db).is_opted_out(user_tag).await {
            Ok(opted_out) => opted_out,
            Err(e) => {
                tracing::error!("Error getting opt-out list: {}", e);
                false
            }
        }
    }
}
