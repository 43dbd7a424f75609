//! Failure reporting to an external alerting channel.
//!
//! The pipeline reports every uncaught failure exactly once. Delivery problems are
//! logged and never propagate back into the pipeline.

use std::time::Duration;

use serde_json::json;
use serenity::async_trait;

use crate::model::alert::FailureReport;

#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn report(&self, report: &FailureReport);
}

/// Alert sink that writes reports to the error log.
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn report(&self, report: &FailureReport) {
        tracing::error!(
            target: "alert",
            context = %report.context,
            guild = ?report.guild_id,
            channel = report.channel_id,
            message = report.message_id,
            "Pipeline failure:\n{}",
            report.error
        );
    }
}

/// Alert sink that POSTs reports as JSON to a webhook URL.
///
/// The body carries a `content` summary (so Discord webhooks render it) and the
/// full report under `report`. Reports are also written to the log.
pub struct WebhookAlertSink {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl WebhookAlertSink {
    /// Creates a webhook sink.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `url` - Webhook endpoint
    /// - `timeout` - Bound on each delivery attempt
    pub fn new(client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }

    async fn deliver(&self, report: &FailureReport) -> Result<(), reqwest::Error> {
        let body = json!({
            "content": format!(
                "Error in {} at {}:\n```\n{}\n```",
                report.context,
                report.occurred_at.to_rfc3339(),
                report.error
            ),
            "report": report,
        });

        self.client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[async_trait]
impl AlertSink for WebhookAlertSink {
    async fn report(&self, report: &FailureReport) {
        LogAlertSink.report(report).await;

        if let Err(e) = self.deliver(report).await {
            tracing::error!("Failed to deliver failure report to alert webhook: {}", e);
        }
    }
}
