use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use serenity::{
    all::{ChannelId, CreateMessage, MessageId, ReactionType, ShardManager},
    async_trait,
    http::Http,
};

use crate::{error::transport::TransportError, service::transport::Transport};

/// `Transport` backed by the Serenity HTTP client and gateway shard manager.
///
/// Attachment downloads go through a separate `reqwest` client since CDN URLs are
/// not Discord API routes.
pub struct SerenityTransport {
    http: Arc<Http>,
    /// Set once the gateway client has been built.
    shard_manager: OnceLock<Arc<ShardManager>>,
    client: reqwest::Client,
    timeout: Duration,
}

impl SerenityTransport {
    /// Creates a transport.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client authenticated with the bot token
    /// - `client` - HTTP client for attachment downloads
    /// - `timeout` - Bound on a single attachment download
    pub fn new(http: Arc<Http>, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            http,
            shard_manager: OnceLock::new(),
            client,
            timeout,
        }
    }

    /// Attaches the gateway shard manager used by `shutdown`.
    ///
    /// Only the first call has any effect.
    pub fn attach_shard_manager(&self, shard_manager: Arc<ShardManager>) {
        if self.shard_manager.set(shard_manager).is_err() {
            tracing::warn!("Shard manager already attached to transport");
        }
    }
}

#[async_trait]
impl Transport for SerenityTransport {
    async fn fetch_content(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout {
                        operation: url.to_string(),
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    TransportError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Fetch {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn send_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: char,
    ) -> Result<(), TransportError> {
        let reaction = ReactionType::Unicode(emoji.to_string());

        self.http
            .create_reaction(ChannelId::new(channel_id), MessageId::new(message_id), &reaction)
            .await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), TransportError> {
        let message = CreateMessage::new().content(content);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), TransportError> {
        ChannelId::new(channel_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn shutdown(&self) -> Result<(), TransportError> {
        let shard_manager = self
            .shard_manager
            .get()
            .ok_or(TransportError::NotConnected)?;

        shard_manager.shutdown_all().await;

        Ok(())
    }
}
