use serenity::async_trait;

use crate::error::transport::TransportError;

/// Operations the pipeline needs from the chat transport.
///
/// Implemented by `bot::transport::SerenityTransport` in production.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Downloads the bytes behind an attachment URL.
    async fn fetch_content(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    /// Adds a unicode reaction to a message.
    async fn send_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: char,
    ) -> Result<(), TransportError>;

    /// Posts a plain text message in a channel.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), TransportError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64)
        -> Result<(), TransportError>;

    /// Closes every gateway connection.
    async fn shutdown(&self) -> Result<(), TransportError>;
}
