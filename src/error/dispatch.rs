use thiserror::Error;

use crate::error::transport::TransportError;

/// Failures raised by owner command handlers.
///
/// These are caught by the dispatcher and logged; they never abort the pipeline.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The handler rejected its input or could not complete.
    #[error("Command '{command}' failed: {message}")]
    Handler {
        /// Name of the command that failed
        command: String,
        /// Human-readable reason
        message: String,
    },

    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
