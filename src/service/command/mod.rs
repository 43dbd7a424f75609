//! Owner command dispatch.
//!
//! Only the configured owner identity reaches this path. The dispatcher recognizes
//! two forms: the exact restart phrase, and `<prefix><name> [args]` commands looked
//! up in the `CommandRegistry`. Every failure inside the dispatcher is logged and
//! turned into a `DispatchOutcome`; nothing propagates into the message pipeline.

pub mod builtin;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{error::dispatch::DispatchError, model::message::MessageEvent, service::transport::Transport};

/// Reaction added when the owner invokes an unknown command.
pub const NOT_FOUND_REACTION: char = '❔';

/// Dependencies and arguments available to a command handler.
pub struct CommandContext<'a> {
    pub db: &'a DatabaseConnection,
    pub transport: &'a dyn Transport,
    /// Text following the command name, trimmed.
    pub args: &'a str,
}

/// A privileged command the owner can run with the command prefix.
#[async_trait]
pub trait OwnerCommand: Send + Sync {
    /// Name matched against the first token after the prefix.
    fn name(&self) -> &'static str;

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        event: &MessageEvent,
    ) -> Result<(), DispatchError>;
}

/// Name to handler mapping, populated once at startup and read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn OwnerCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing every built-in owner command.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(builtin::ChanceCommand);
        registry.register(builtin::CooldownCommand);
        registry.register(builtin::OptOutCommand);
        registry
    }

    /// Adds a command, replacing any earlier command with the same name.
    pub fn register<C: OwnerCommand + 'static>(&mut self, command: C) {
        self.commands.insert(command.name(), Box::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&dyn OwnerCommand> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// What the dispatcher did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not an owner command; the pipeline continues.
    Passthrough,
    /// A registered command ran successfully.
    Executed(String),
    /// A registered command ran and returned an error, which was logged.
    Failed(String),
    /// The command name is not registered; the message was reacted to.
    NotFound(String),
    /// The restart phrase was received and the transport was shut down.
    Restart,
}

impl DispatchOutcome {
    /// Whether the pipeline should stop processing the message.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

pub struct OwnerDispatcher {
    owner_id: u64,
    prefix: String,
    restart_phrase: String,
    registry: CommandRegistry,
}

impl OwnerDispatcher {
    /// Creates a dispatcher for a single privileged identity.
    ///
    /// # Arguments
    /// - `owner_id` - Discord user ID allowed to run commands
    /// - `prefix` - Prefix that marks a message as a command
    /// - `restart_phrase` - Exact message text that shuts the bot down
    /// - `registry` - Commands available to the owner
    pub fn new(
        owner_id: u64,
        prefix: String,
        restart_phrase: String,
        registry: CommandRegistry,
    ) -> Self {
        Self {
            owner_id,
            prefix,
            restart_phrase,
            registry,
        }
    }

    /// Routes an owner message to a command or the restart sequence.
    ///
    /// Messages from any other author return `Passthrough` without inspecting the
    /// content. The restart phrase is matched before the prefix so a phrase that
    /// starts with the prefix still restarts.
    ///
    /// # Arguments
    /// - `event` - Inbound message
    /// - `db` - Database connection handed to command handlers
    /// - `transport` - Used for reactions, replies, deletion and shutdown
    ///
    /// # Returns
    /// - `DispatchOutcome` - Never an error; handler failures become `Failed`
    pub async fn dispatch(
        &self,
        event: &MessageEvent,
        db: &DatabaseConnection,
        transport: &dyn Transport,
    ) -> DispatchOutcome {
        if event.author.id != self.owner_id {
            return DispatchOutcome::Passthrough;
        }

        let content = event.flat_content();

        if content == self.restart_phrase {
            self.restart(event, transport).await;
            return DispatchOutcome::Restart;
        }

        let Some(invocation) = content.strip_prefix(self.prefix.as_str()) else {
            return DispatchOutcome::Passthrough;
        };

        let (name, args) = match invocation.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (invocation, ""),
        };

        tracing::info!(
            target: "command",
            guild = event.guild_label(),
            channel = event.channel_label(),
            author = %event.author.tag,
            "{}",
            content
        );

        let Some(command) = self.registry.get(name) else {
            if let Err(e) = transport
                .send_reaction(event.channel_id, event.message_id, NOT_FOUND_REACTION)
                .await
            {
                tracing::error!("Failed to react to unknown command '{}': {}", name, e);
            }
            return DispatchOutcome::NotFound(name.to_string());
        };

        let ctx = CommandContext {
            db,
            transport,
            args,
        };

        match command.execute(&ctx, event).await {
            Ok(()) => DispatchOutcome::Executed(name.to_string()),
            Err(e) => {
                tracing::error!("Error processing owner command '{}': {}", name, e);
                DispatchOutcome::Failed(name.to_string())
            }
        }
    }

    /// Deletes the triggering message, then closes the gateway connection.
    ///
    /// Both steps are best effort; a failed deletion does not prevent shutdown.
    async fn restart(&self, event: &MessageEvent, transport: &dyn Transport) {
        tracing::info!("Restart requested by owner {}", event.author.tag);

        if let Err(e) = transport
            .delete_message(event.channel_id, event.message_id)
            .await
        {
            tracing::warn!("Failed to delete restart message: {}", e);
        }

        if let Err(e) = transport.shutdown().await {
            tracing::error!("Failed to shut down gateway connection: {}", e);
        }
    }
}
