//! Per-message pipeline.
//!
//! Runs every inbound event through, in order: classification, owner dispatch,
//! guild check, opt-out gate, guild settings, cooldown gate, then the engagement
//! decision concurrently with attachment archiving, and finally the reply trigger.
//! `handle` is the failure boundary: anything `process` returns as an error is
//! logged, reported to the alert sink and the event is dropped.

use std::{path::PathBuf, sync::Arc};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    config::CooldownPolicy,
    error::AppError,
    model::{
        alert::FailureReport,
        category::MessageCategory,
        engagement::{Decision, Engagement, ReplyRequest},
        message::MessageEvent,
        reply_channel::GuildSettings,
    },
    service::{
        alert::AlertSink,
        archiver::AttachmentArchiver,
        command::{DispatchOutcome, OwnerDispatcher},
        cooldown::{minutes_remaining, CooldownGate},
        engagement::EngagementEngine,
        opt_out::OptOutGate,
        reply::ReplyTrigger,
        settings::SettingsService,
        transport::Transport,
    },
};

/// Context name attached to failure reports raised by the pipeline.
const FAILURE_CONTEXT: &str = "message_create";

/// How far a message got through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Consumed by the owner dispatcher.
    Command(DispatchOutcome),
    /// No guild context; logged only.
    Direct,
    /// Author is in the opt-out set; logged only.
    OptedOut,
    /// Counted and decided.
    Evaluated {
        engagement: Engagement,
        /// Attachment files written for this message.
        archived: Vec<PathBuf>,
    },
}

pub struct MessagePipeline {
    db: DatabaseConnection,
    transport: Arc<dyn Transport>,
    reply_trigger: Arc<dyn ReplyTrigger>,
    alerts: Arc<dyn AlertSink>,
    dispatcher: OwnerDispatcher,
    archiver: AttachmentArchiver,
    cooldown_policy: CooldownPolicy,
}

impl MessagePipeline {
    /// Assembles the pipeline from its collaborators.
    ///
    /// # Arguments
    /// - `db` - Connection pool shared by all gates and the engagement engine
    /// - `transport` - Chat transport used for commands and attachment fetches
    /// - `reply_trigger` - Receives reply requests
    /// - `alerts` - Receives failure reports
    /// - `dispatcher` - Owner command dispatcher
    /// - `archiver` - Attachment archiver
    /// - `cooldown_policy` - Whether an active cooldown withholds the reply trigger
    pub fn new(
        db: DatabaseConnection,
        transport: Arc<dyn Transport>,
        reply_trigger: Arc<dyn ReplyTrigger>,
        alerts: Arc<dyn AlertSink>,
        dispatcher: OwnerDispatcher,
        archiver: AttachmentArchiver,
        cooldown_policy: CooldownPolicy,
    ) -> Self {
        Self {
            db,
            transport,
            reply_trigger,
            alerts,
            dispatcher,
            archiver,
            cooldown_policy,
        }
    }

    /// Processes one message and reports any failure instead of returning it.
    pub async fn handle(&self, event: MessageEvent) {
        if let Err(e) = self.process(&event).await {
            tracing::error!("Error executing {}: {}", FAILURE_CONTEXT, e);

            let report = FailureReport::new(FAILURE_CONTEXT, &e, &event);
            self.alerts.report(&report).await;
        }
    }

    /// Runs one message through the pipeline.
    ///
    /// # Returns
    /// - `Ok(PipelineOutcome)` - Where processing stopped
    /// - `Err(AppError)` - The reply trigger failed
    ///
    /// Unreadable guild settings are logged and treated as a guild without reply
    /// channels: the message is still counted but never triggers a reply.
    pub async fn process(&self, event: &MessageEvent) -> Result<PipelineOutcome, AppError> {
        let category = MessageCategory::classify(event);

        let dispatched = self
            .dispatcher
            .dispatch(event, &self.db, self.transport.as_ref())
            .await;
        if dispatched.is_terminal() {
            return Ok(PipelineOutcome::Command(dispatched));
        }

        let Some(guild_id) = event.guild_id else {
            log_message(event, category, category.label());
            return Ok(PipelineOutcome::Direct);
        };

        if OptOutGate::new(&self.db)
            .is_suppressed(&event.author.tag)
            .await
        {
            log_message(event, category, "OPTED OUT");
            return Ok(PipelineOutcome::OptedOut);
        }

        let settings = match SettingsService::new(&self.db).get_settings(guild_id).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Error fetching reply settings for guild {}: {}", guild_id, e);
                GuildSettings::default()
            }
        };

        let now = Utc::now();
        let cooldown = CooldownGate::new(&self.db)
            .remaining(guild_id, event.channel_id, now)
            .await;
        if !cooldown.is_zero() {
            tracing::info!(
                "Replies are paused for another {} minutes.",
                minutes_remaining(cooldown)
            );
        }

        let engine = EngagementEngine::new(&self.db, self.cooldown_policy);
        let archive = async {
            if category.is_reply_eligible() {
                self.archiver
                    .archive(event, self.transport.as_ref(), now.date_naive())
                    .await
            } else {
                Vec::new()
            }
        };

        let (archived, engagement) = tokio::join!(
            archive,
            engine.evaluate(event, category, &settings, cooldown)
        );

        if category.is_reply_eligible() {
            log_message(event, category, &format!("{}%", engagement.chance));
        } else {
            log_message(event, category, category.label());
        }

        match engagement.decision {
            Decision::Reply => {
                self.reply_trigger
                    .trigger(ReplyRequest {
                        guild_id,
                        channel_id: event.channel_id,
                        message_id: event.message_id,
                        author_tag: event.author.tag.clone(),
                        chance: engagement.chance,
                    })
                    .await?;
            }
            Decision::Suppress(reason) => {
                tracing::debug!("Reply suppressed: {:?}", reason);
            }
        }

        Ok(PipelineOutcome::Evaluated {
            engagement,
            archived,
        })
    }
}

/// Emits the single summary line for a classified message.
fn log_message(event: &MessageEvent, category: MessageCategory, marker: &str) {
    tracing::info!(
        target: "message",
        category = category.label(),
        guild = event.guild_label(),
        channel = event.channel_label(),
        author = %event.author.tag,
        "{} - {} - #{} - {} - {}",
        marker,
        event.guild_label(),
        event.channel_label(),
        event.author.tag,
        event.describe()
    );
}
