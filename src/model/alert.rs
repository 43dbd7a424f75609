//! Failure reports for the external alerting channel.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::message::MessageEvent;

/// Structured description of an uncaught pipeline failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FailureReport {
    /// Where the failure happened (handler name).
    pub context: String,
    /// Rendered error chain.
    pub error: String,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    pub occurred_at: DateTime<Utc>,
}

impl FailureReport {
    /// Builds a report for an error raised while processing `event`.
    ///
    /// The error's `source()` chain is flattened into the `error` field.
    pub fn new(context: &str, error: &(dyn std::error::Error + 'static), event: &MessageEvent) -> Self {
        let mut rendered = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            rendered.push_str(&format!("\ncaused by: {}", cause));
            source = cause.source();
        }

        Self {
            context: context.to_string(),
            error: rendered,
            guild_id: event.guild_id,
            channel_id: event.channel_id,
            message_id: event.message_id,
            occurred_at: Utc::now(),
        }
    }
}
