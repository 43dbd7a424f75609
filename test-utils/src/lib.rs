//! Autoreply Test Utils
//!
//! Provides shared testing utilities for the autoreply bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for
//! seeding the opt-out, cooldown, counter and reply-channel tables, and Serenity object
//! fixtures built from JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ChannelCounter;
//!
//! #[tokio::test]
//! async fn test_counter_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ChannelCounter)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
