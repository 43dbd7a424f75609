//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::TestMessageBuilder;
//!
//! let message = TestMessageBuilder::new(1, 2, "someone")
//!     .guild_id(3)
//!     .content("hello")
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `message::TestMessageBuilder` - Create Serenity Message objects

pub mod message;

pub use message::TestMessageBuilder;
