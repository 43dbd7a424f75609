//! Engagement decision engine.
//!
//! Owns mutation of the per-channel chance counter. Every message that reaches the
//! engine increments its channel's counter by `CHANCE_STEP`, whether or not a reply
//! is triggered; the decision itself is a pure function of origin, reply policy and
//! cooldown.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    config::CooldownPolicy,
    data::channel_counter::ChannelCounterRepository,
    model::{
        category::MessageCategory,
        engagement::{Decision, Engagement, SuppressReason},
        message::MessageEvent,
        reply_channel::{GuildSettings, ReplyChannel},
    },
};

/// Amount added to a channel's counter per qualifying message.
pub const CHANCE_STEP: i64 = 1;

pub struct EngagementEngine<'a> {
    db: &'a DatabaseConnection,
    cooldown_policy: CooldownPolicy,
}

impl<'a> EngagementEngine<'a> {
    pub fn new(db: &'a DatabaseConnection, cooldown_policy: CooldownPolicy) -> Self {
        Self {
            db,
            cooldown_policy,
        }
    }

    /// Accrues engagement pressure for the message's channel and decides whether to
    /// trigger a reply.
    ///
    /// A failed increment is logged and the decision proceeds on the chance read with
    /// the guild settings; the stored value is left untouched.
    ///
    /// # Arguments
    /// - `event` - Guild message that passed the opt-out gate
    /// - `category` - Origin classification of the message
    /// - `settings` - Reply policy for the message's guild
    /// - `cooldown` - Remaining cooldown for the channel
    ///
    /// # Returns
    /// - `Engagement` - Chance after this message (0 without a reply policy) and the decision
    pub async fn evaluate(
        &self,
        event: &MessageEvent,
        category: MessageCategory,
        settings: &GuildSettings,
        cooldown: Duration,
    ) -> Engagement {
        let policy = settings.reply_channel(event.channel_id);

        let counted = match ChannelCounterRepository::new(self.db)
            .increment(event.channel_id, CHANCE_STEP)
            .await
        {
            Ok(counter) => Some(counter.chance),
            Err(e) => {
                tracing::error!(
                    "Error updating reply chance for channel {} in guild {:?}: {}",
                    event.channel_id,
                    event.guild_id,
                    e
                );
                None
            }
        };

        let chance = match policy {
            Some(policy) => counted.unwrap_or(policy.chance),
            None => 0,
        };

        Engagement {
            chance,
            decision: decide(category, policy, cooldown, self.cooldown_policy),
        }
    }
}

/// Applies origin, reply policy and cooldown rules in that order.
pub fn decide(
    category: MessageCategory,
    policy: Option<&ReplyChannel>,
    cooldown: Duration,
    cooldown_policy: CooldownPolicy,
) -> Decision {
    if !category.is_reply_eligible() {
        return Decision::Suppress(SuppressReason::Origin(category));
    }

    if policy.is_none() {
        return Decision::Suppress(SuppressReason::NoReplyPolicy);
    }

    if !cooldown.is_zero() && cooldown_policy == CooldownPolicy::Suppress {
        return Decision::Suppress(SuppressReason::Cooldown(cooldown));
    }

    Decision::Reply
}
