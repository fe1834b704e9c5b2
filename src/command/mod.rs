pub mod cooldown;
pub mod fill;

pub use cooldown::Cooldowns;
pub use fill::{FillDispensersCommand, FillRequest, FILL_PERMISSION};

use std::collections::HashMap;

use log::info;
use thiserror::Error;

use crate::player::SharedPlayer;

/// Precondition failures surfaced to the caller. `Display` is the exact
/// user-facing message; none of these propagate past the gateway.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("This command can only be used by a player.")]
    NotAPlayer,
    #[error("You do not have permission to use this command.")]
    Unauthorized,
    #[error("You must wait {0} seconds to use this command again.")]
    OnCooldown(u64),
    #[error("You must be holding an item to fill the dispensers.")]
    EmptyHand,
    #[error("Invalid radius specified. Please enter a valid number.")]
    InvalidRadius,
}

#[derive(Clone)]
pub enum CommandSender {
    Console,
    Player(SharedPlayer),
}

impl CommandSender {
    pub fn send_message(&self, message: impl Into<String>) {
        match self {
            CommandSender::Console => info!("{}", message.into()),
            CommandSender::Player(player) => player.write().send_message(message),
        }
    }
}

pub trait CommandHandler: Send + Sync {
    /// Returns true when the invocation was handled, rejections included.
    fn execute(&self, sender: &CommandSender, args: &[&str]) -> bool;
}

/// Name to handler table; the host framework dispatches raw input through it.
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        self.handlers.insert(name.into().to_ascii_lowercase(), handler);
    }

    /// Splits `input` into a command name and arguments and runs the
    /// matching handler. A leading slash is accepted and ignored.
    pub fn dispatch(&self, sender: &CommandSender, input: &str) -> bool {
        let input = input.trim();
        let input = input.strip_prefix('/').unwrap_or(input);

        let mut parts = input.split_whitespace();
        let Some(name) = parts.next() else {
            return false;
        };
        let args: Vec<&str> = parts.collect();

        match self.handlers.get(&name.to_ascii_lowercase()) {
            Some(handler) => handler.execute(sender, &args),
            None => {
                sender.send_message(format!("Unknown command: {name}"));
                false
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
