use std::{path::PathBuf, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_RESTART_PHRASE: &str = "ar.restart";
const DEFAULT_MEDIA_DIR: &str = "data/media";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// Whether an active channel cooldown withholds the reply trigger.
///
/// The chance counter accrues either way; the policy only affects the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CooldownPolicy {
    /// Active cooldown suppresses the reply trigger.
    #[default]
    Suppress,
    /// Active cooldown is logged but the trigger still fires.
    Inform,
}

impl CooldownPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suppress" => Some(Self::Suppress),
            "inform" => Some(Self::Inform),
            _ => None,
        }
    }
}

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Discord user ID allowed to run owner commands.
    pub owner_id: u64,
    pub command_prefix: String,
    /// Exact message text that shuts the bot down.
    pub restart_phrase: String,

    pub media_dir: PathBuf,
    pub alert_webhook_url: Option<String>,
    pub cooldown_policy: CooldownPolicy,

    /// Bound on attachment fetches and alert webhook requests.
    pub http_timeout: Duration,
    /// Bound on acquiring a storage connection.
    pub storage_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let owner_id = parse_var("OWNER_ID", required("OWNER_ID")?)?;

        let cooldown_policy = match lookup("COOLDOWN_POLICY") {
            Some(value) => CooldownPolicy::parse(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "COOLDOWN_POLICY".to_string(),
                value,
            })?,
            None => CooldownPolicy::default(),
        };

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => parse_var("HTTP_TIMEOUT_SECS", value)?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let storage_timeout_secs = match lookup("STORAGE_TIMEOUT_SECS") {
            Some(value) => parse_var("STORAGE_TIMEOUT_SECS", value)?,
            None => DEFAULT_STORAGE_TIMEOUT_SECS,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            owner_id,
            command_prefix: required("COMMAND_PREFIX")?,
            restart_phrase: lookup("RESTART_PHRASE")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_RESTART_PHRASE.to_string()),
            media_dir: lookup("MEDIA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR)),
            alert_webhook_url: lookup("ALERT_WEBHOOK_URL").filter(|value| !value.is_empty()),
            cooldown_policy,
            http_timeout: Duration::from_secs(http_timeout_secs),
            storage_timeout: Duration::from_secs(storage_timeout_secs),
        })
    }
}

fn parse_var(name: &str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
