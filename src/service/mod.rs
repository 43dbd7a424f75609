//! Service layer for the message pipeline.
//!
//! Services hold the business rules and orchestrate repositories and the external
//! collaborators. The external collaborators sit behind traits: `Transport` for
//! Discord and remote content, `ReplyTrigger` for reply generation and `AlertSink`
//! for failure reports.

pub mod alert;
pub mod archiver;
pub mod command;
pub mod cooldown;
pub mod engagement;
pub mod opt_out;
pub mod pipeline;
pub mod reply;
pub mod settings;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
