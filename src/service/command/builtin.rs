//! Built-in owner commands. All of them are read-only.

use chrono::Utc;
use serenity::async_trait;

use crate::{
    data::{channel_counter::ChannelCounterRepository, opt_out::OptOutRepository},
    error::dispatch::DispatchError,
    model::message::MessageEvent,
    service::{
        command::{CommandContext, OwnerCommand},
        cooldown::{minutes_remaining, CooldownGate},
    },
};

/// `chance` - reports the channel's current engagement counter.
pub struct ChanceCommand;

#[async_trait]
impl OwnerCommand for ChanceCommand {
    fn name(&self) -> &'static str {
        "chance"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        event: &MessageEvent,
    ) -> Result<(), DispatchError> {
        let chance = ChannelCounterRepository::new(ctx.db)
            .get(event.channel_id)
            .await?
            .map(|counter| counter.chance)
            .unwrap_or(0);

        ctx.transport
            .send_message(
                event.channel_id,
                &format!("Reply chance in this channel is {}%.", chance),
            )
            .await?;

        Ok(())
    }
}

/// `cooldown` - reports how long replies in the channel stay paused.
pub struct CooldownCommand;

#[async_trait]
impl OwnerCommand for CooldownCommand {
    fn name(&self) -> &'static str {
        "cooldown"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        event: &MessageEvent,
    ) -> Result<(), DispatchError> {
        let Some(guild_id) = event.guild_id else {
            return Err(DispatchError::Handler {
                command: self.name().to_string(),
                message: "cooldowns only exist in guild channels".to_string(),
            });
        };

        let remaining = CooldownGate::new(ctx.db)
            .remaining(guild_id, event.channel_id, Utc::now())
            .await;

        let reply = if remaining.is_zero() {
            "Replies are not paused in this channel.".to_string()
        } else {
            format!(
                "Replies are paused for another {} minutes.",
                minutes_remaining(remaining)
            )
        };

        ctx.transport.send_message(event.channel_id, &reply).await?;

        Ok(())
    }
}

/// `optout <tag>` - reports whether a user tag is in the opt-out set.
pub struct OptOutCommand;

#[async_trait]
impl OwnerCommand for OptOutCommand {
    fn name(&self) -> &'static str {
        "optout"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        event: &MessageEvent,
    ) -> Result<(), DispatchError> {
        if ctx.args.is_empty() {
            return Err(DispatchError::Handler {
                command: self.name().to_string(),
                message: "usage: optout <tag>".to_string(),
            });
        }

        let opted_out = OptOutRepository::new(ctx.db)
            .is_opted_out(ctx.args)
            .await?;

        let reply = if opted_out {
            format!("{} is opted out.", ctx.args)
        } else {
            format!("{} is not opted out.", ctx.args)
        };

        ctx.transport.send_message(event.channel_id, &reply).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{guild_event, RecordingTransport, TransportCall};
    use test_utils::{builder::TestBuilder, factory};

    fn sent_messages(transport: &RecordingTransport) -> Vec<String> {
        transport
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Message { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn chance_reports_stored_counter() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ChannelCounter)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let transport = RecordingTransport::new();

        let counter = factory::channel_counter::ChannelCounterFactory::new(db)
            .chance(42)
            .build()
            .await
            .unwrap();
        let channel_id: u64 = counter.channel_id.parse().unwrap();

        let ctx = CommandContext {
            db,
            transport: &transport,
            args: "",
        };
        ChanceCommand
            .execute(&ctx, &guild_event(1, channel_id, "owner", "ar.chance"))
            .await
            .unwrap();

        assert_eq!(
            sent_messages(&transport),
            vec!["Reply chance in this channel is 42%.".to_string()]
        );
    }

    #[tokio::test]
    async fn chance_defaults_to_zero() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ChannelCounter)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let transport = RecordingTransport::new();

        let ctx = CommandContext {
            db,
            transport: &transport,
            args: "",
        };
        ChanceCommand
            .execute(&ctx, &guild_event(1, 2, "owner", "ar.chance"))
            .await
            .unwrap();

        assert_eq!(
            sent_messages(&transport),
            vec!["Reply chance in this channel is 0%.".to_string()]
        );
    }

    #[tokio::test]
    async fn cooldown_reports_minutes_rounded_up() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ReplyCooldown)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let transport = RecordingTransport::new();

        let cooldown = factory::reply_cooldown::ReplyCooldownFactory::new(db)
            .expires_in(chrono::Duration::seconds(4 * 60 + 30))
            .build()
            .await
            .unwrap();
        let guild_id: u64 = cooldown.guild_id.parse().unwrap();
        let channel_id: u64 = cooldown.channel_id.parse().unwrap();

        let ctx = CommandContext {
            db,
            transport: &transport,
            args: "",
        };
        CooldownCommand
            .execute(&ctx, &guild_event(guild_id, channel_id, "owner", "ar.cooldown"))
            .await
            .unwrap();

        assert_eq!(
            sent_messages(&transport),
            vec!["Replies are paused for another 5 minutes.".to_string()]
        );
    }

    #[tokio::test]
    async fn optout_requires_tag() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::OptOut)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let transport = RecordingTransport::new();

        let ctx = CommandContext {
            db,
            transport: &transport,
            args: "",
        };
        let result = OptOutCommand
            .execute(&ctx, &guild_event(1, 2, "owner", "ar.optout"))
            .await;

        assert!(matches!(result, Err(DispatchError::Handler { .. })));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn optout_reports_membership() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::OptOut)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let transport = RecordingTransport::new();

        factory::opt_out::OptOutFactory::new(db)
            .user_tag("quiet_user")
            .build()
            .await
            .unwrap();

        let ctx = CommandContext {
            db,
            transport: &transport,
            args: "quiet_user",
        };
        OptOutCommand
            .execute(&ctx, &guild_event(1, 2, "owner", "ar.optout quiet_user"))
            .await
            .unwrap();

        assert_eq!(
            sent_messages(&transport),
            vec!["quiet_user is opted out.".to_string()]
        );
    }
}
