use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::pipeline::MessagePipeline,
};

/// Builds the Discord client with the message pipeline as its event handler.
///
/// The client is not connected yet; pass it to `start_bot` once its shard manager
/// has been attached to the transport.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `pipeline` - Pipeline shared by every message event
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, pipeline: Arc<MessagePipeline>) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(pipeline))
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until every shard has shut down.
///
/// Returns after the owner restart command closes the shards.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
