// =====================================================
// FILE: src/commands/handler.rs
// =====================================================

use super::context::SiteContext;
use super::registry::CommandRegistry;
use crate::core::constants::SIG_EXIT;

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
            should_exit: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            registry: crate::create_default_registry(),
        }
    }

    pub fn handle_input(&self, ctx: &mut SiteContext, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some((&name, args)) = parts.split_first() else {
            return CommandResult::failed(String::new());
        };

        log::debug!("CommandHandler processing: '{}'", input);

        match self.registry.execute(ctx, name, args) {
            Some(Ok(msg)) => {
                let should_exit = msg.starts_with(SIG_EXIT);
                let message = msg.trim_start_matches(SIG_EXIT).to_string();
                log::debug!(
                    "Command '{}' returned {} chars, should_exit={}",
                    name,
                    message.chars().count(),
                    should_exit
                );
                CommandResult {
                    message,
                    success: true,
                    should_exit,
                }
            }
            Some(Err(e)) => {
                log::error!("Command error: {}", e);
                CommandResult::failed(e.to_string())
            }
            None => {
                log::warn!("Unknown command: {}", input);
                CommandResult::failed(format!("Unknown command: '{}'. Type 'help'.", name))
            }
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.registry.list_commands()
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
