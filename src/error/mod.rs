//! Error types for the message pipeline.
//!
//! `AppError` is the top-level error type. Anything that escapes
//! `MessagePipeline::process` is a pipeline failure: it is logged, reported to the
//! alert sink and the event is dropped. Domain-specific errors live in submodules
//! and convert into `AppError` with `#[from]`.

pub mod config;
pub mod dispatch;
pub mod transport;

use thiserror::Error;

use crate::error::{config::ConfigError, dispatch::DispatchError, transport::TransportError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers every read or write against the opt-out, cooldown, counter and reply
    /// channel tables.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Fetching content from or acting through the transport failed.
    #[error(transparent)]
    TransportErr(#[from] TransportError),

    /// An owner command handler failed.
    #[error(transparent)]
    DispatchErr(#[from] DispatchError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
