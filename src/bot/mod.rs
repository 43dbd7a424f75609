//! Discord gateway integration.
//!
//! The bot receives message events from the Serenity gateway client, converts them
//! into `MessageEvent`s and hands each one to the shared `MessagePipeline`. Serenity
//! dispatches every event on its own task, so messages from different channels are
//! processed concurrently.
//!
//! `SerenityTransport` is the pipeline's view of Discord: reactions, messages,
//! deletion, gateway shutdown and attachment downloads.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild metadata used to resolve guild names from the cache
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `DIRECT_MESSAGES` - Messages sent to the bot directly
//! - `MESSAGE_CONTENT` - Message text, embeds, polls and attachments (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
pub mod transport;
