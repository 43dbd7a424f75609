use serenity::all::{Context, Message, UserPublicFlags};

use crate::{model::message::MessageEvent, service::pipeline::MessagePipeline};

/// Handle message creation in a channel
///
/// Resolves guild and channel names, fills in the verified flag for bot authors
/// when the gateway omitted it, then runs the pipeline.
pub async fn handle_message(pipeline: &MessagePipeline, ctx: Context, message: Message) {
    let guild_name = message
        .guild_id
        .and_then(|guild_id| ctx.cache.guild(guild_id).map(|guild| guild.name.clone()));

    // DM channels have no name of their own
    let channel_name = match message.guild_id {
        Some(_) => match message.channel_id.name(&ctx).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(
                    "Failed to resolve name of channel {}: {}",
                    message.channel_id,
                    e
                );
                None
            }
        },
        None => None,
    };

    let mut event = MessageEvent::from_message(&message, guild_name, channel_name);

    if message.author.bot && message.author.public_flags.is_none() {
        match ctx.http.get_user(message.author.id).await {
            Ok(user) => {
                event.author.verified_bot = user
                    .public_flags
                    .is_some_and(|flags| flags.contains(UserPublicFlags::VERIFIED_BOT));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch flags for author {}: {}",
                    message.author.name,
                    e
                );
            }
        }
    }

    pipeline.handle(event).await;
}
