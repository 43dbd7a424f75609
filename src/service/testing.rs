//! Recording fakes for the pipeline's external collaborators.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::Duration,
};

use serenity::async_trait;

use crate::{
    error::{transport::TransportError, AppError},
    model::{
        alert::FailureReport,
        engagement::ReplyRequest,
        message::{MessageAuthor, MessageEvent},
    },
    service::{alert::AlertSink, reply::ReplyTrigger, transport::Transport},
};

#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Fetch(String),
    Reaction {
        channel_id: u64,
        message_id: u64,
        emoji: char,
    },
    Message {
        channel_id: u64,
        content: String,
    },
    Delete {
        channel_id: u64,
        message_id: u64,
    },
    Shutdown,
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<TransportCall>>,
    contents: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    fail_delete: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, url: &str, bytes: &[u8]) -> Self {
        self.contents.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than attachment fetches, in order.
    pub fn actions(&self) -> Vec<TransportCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, TransportCall::Fetch(_)))
            .collect()
    }

    fn record(&self, call: TransportCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn fetch_content(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.record(TransportCall::Fetch(url.to_string()));

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        self.contents
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Fetch {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn send_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: char,
    ) -> Result<(), TransportError> {
        self.record(TransportCall::Reaction {
            channel_id,
            message_id,
            emoji,
        });
        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), TransportError> {
        self.record(TransportCall::Message {
            channel_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), TransportError> {
        self.record(TransportCall::Delete {
            channel_id,
            message_id,
        });

        if self.fail_delete {
            return Err(TransportError::NotConnected);
        }
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), TransportError> {
        self.record(TransportCall::Shutdown);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingReplyTrigger {
    requests: Mutex<Vec<ReplyRequest>>,
    fail: bool,
}

impl RecordingReplyTrigger {
    pub fn failing() -> Self {
        Self {
            requests: Mutex::default(),
            fail: true,
        }
    }

    pub fn requests(&self) -> Vec<ReplyRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyTrigger for RecordingReplyTrigger {
    async fn trigger(&self, request: ReplyRequest) -> Result<(), AppError> {
        self.requests.lock().unwrap().push(request);

        if self.fail {
            return Err(AppError::IoErr(std::io::Error::other(
                "reply generator unavailable",
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAlertSink {
    reports: Mutex<Vec<FailureReport>>,
}

impl RecordingAlertSink {
    pub fn reports(&self) -> Vec<FailureReport> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for RecordingAlertSink {
    async fn report(&self, report: &FailureReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}

/// Builds a plain human guild message event.
pub fn guild_event(guild_id: u64, channel_id: u64, author_tag: &str, content: &str) -> MessageEvent {
    MessageEvent {
        message_id: 900_000_000_000_000_001,
        author: MessageAuthor {
            id: 800_000_000_000_000_001,
            tag: author_tag.to_string(),
            bot: false,
            system: false,
            verified_bot: false,
        },
        guild_id: Some(guild_id),
        guild_name: Some("Test Guild".to_string()),
        channel_id,
        channel_name: Some("general".to_string()),
        webhook_id: None,
        content: content.to_string(),
        embed_count: 0,
        poll: None,
        attachments: Vec::new(),
    }
}
