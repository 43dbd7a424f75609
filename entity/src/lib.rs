//! SeaORM entity models for the autoreply database.
//!
//! Each module maps one table. The tables are independent of each other and carry
//! no foreign keys; snowflake IDs are stored as strings.

pub mod prelude;

pub mod channel_counter;
pub mod opt_out;
pub mod reply_channel;
pub mod reply_cooldown;
