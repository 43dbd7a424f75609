use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    service::{
        alert::{AlertSink, LogAlertSink, WebhookAlertSink},
        archiver::AttachmentArchiver,
        command::{CommandRegistry, OwnerDispatcher},
        pipeline::MessagePipeline,
        reply::LogReplyTrigger,
        transport::Transport,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// opt-out, cooldown, counter and reply channel tables exist. Acquiring a pooled
/// connection is bounded by the configured storage timeout.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.acquire_timeout(config.storage_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for attachment downloads and alert webhooks.
///
/// Requests are bounded by the configured HTTP timeout.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    Ok(client)
}

/// Chooses the alert sink: the webhook when `ALERT_WEBHOOK_URL` is set, the log otherwise.
pub fn setup_alert_sink(config: &Config, http_client: reqwest::Client) -> Arc<dyn AlertSink> {
    match &config.alert_webhook_url {
        Some(url) => Arc::new(WebhookAlertSink::new(
            http_client,
            url.clone(),
            config.http_timeout,
        )),
        None => {
            tracing::warn!("ALERT_WEBHOOK_URL is not set, failure reports go to the log only");
            Arc::new(LogAlertSink)
        }
    }
}

/// Assembles the message pipeline with the built-in owner commands.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Connected database
/// - `transport` - Discord transport
/// - `alerts` - Failure report sink
pub fn build_pipeline(
    config: &Config,
    db: DatabaseConnection,
    transport: Arc<dyn Transport>,
    alerts: Arc<dyn AlertSink>,
) -> MessagePipeline {
    let registry = CommandRegistry::with_builtin();
    tracing::info!("Loaded {} owner commands", registry.len());

    let dispatcher = OwnerDispatcher::new(
        config.owner_id,
        config.command_prefix.clone(),
        config.restart_phrase.clone(),
        registry,
    );

    MessagePipeline::new(
        db,
        transport,
        Arc::new(LogReplyTrigger),
        alerts,
        dispatcher,
        AttachmentArchiver::new(config.media_dir.clone(), config.http_timeout),
        config.cooldown_policy,
    )
}
