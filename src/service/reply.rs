//! Hand-off to the external reply generator.

use serenity::async_trait;

use crate::{error::AppError, model::engagement::ReplyRequest};

/// Receives reply triggers emitted by the pipeline.
#[async_trait]
pub trait ReplyTrigger: Send + Sync {
    async fn trigger(&self, request: ReplyRequest) -> Result<(), AppError>;
}

/// Reply trigger that only records the request in the log.
///
/// Used when no reply generator is attached.
pub struct LogReplyTrigger;

#[async_trait]
impl ReplyTrigger for LogReplyTrigger {
    async fn trigger(&self, request: ReplyRequest) -> Result<(), AppError> {
        tracing::info!(
            target: "reply",
            guild = request.guild_id,
            channel = request.channel_id,
            message = request.message_id,
            author = %request.author_tag,
            chance = request.chance,
            "Reply triggered"
        );
        Ok(())
    }
}
