//! Domain models for the message pipeline.
//!
//! Repositories convert entity models into these types at the data boundary; the
//! bot layer converts Serenity messages into `MessageEvent`. Services only see
//! domain models.

pub mod alert;
pub mod category;
pub mod channel_counter;
pub mod cooldown;
pub mod engagement;
pub mod message;
pub mod reply_channel;
