//! Factory methods for creating test data.
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let opt_out = factory::create_opt_out(&db).await?;
//!
//!     // Create a reply channel together with its counter
//!     let (channel, counter) =
//!         factory::helpers::create_reply_channel_with_counter(&db, 42).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `opt_out` - Opted-out users
//! - `reply_cooldown` - Channel cooldown windows
//! - `channel_counter` - Channel reply chance counters
//! - `reply_channel` - Channels configured for autonomous replies
//! - `helpers` - ID generation and multi-table helpers

pub mod channel_counter;
pub mod helpers;
pub mod opt_out;
pub mod reply_channel;
pub mod reply_cooldown;

pub use channel_counter::create_channel_counter;
pub use opt_out::create_opt_out;
pub use reply_channel::create_reply_channel;
pub use reply_cooldown::create_reply_cooldown;
