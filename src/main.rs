mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use serenity::http::Http;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{bot::transport::SerenityTransport, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;

    let discord_http = Arc::new(Http::new(&config.discord_bot_token));
    let transport = Arc::new(SerenityTransport::new(
        discord_http,
        http_client.clone(),
        config.http_timeout,
    ));
    let alerts = startup::setup_alert_sink(&config, http_client);

    let pipeline = Arc::new(startup::build_pipeline(
        &config,
        db.clone(),
        transport.clone(),
        alerts,
    ));

    let client = bot::start::init_bot(&config, pipeline).await?;
    transport.attach_shard_manager(client.shard_manager.clone());

    // Returns once the gateway shuts down, normally after the owner restart command
    let result = bot::start::start_bot(client).await;

    tracing::info!("Gateway closed, shutting down");
    db.close().await?;

    result
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
