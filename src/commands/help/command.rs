use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "help" | "?" | "commands")
    }

    fn execute(&self, _ctx: &mut SiteContext, _args: &[&str]) -> Result<String> {
        let registry = crate::create_default_registry();
        let mut commands = registry.list_commands();
        commands.sort_by_key(|(name, _)| *name);

        let lines: Vec<String> = commands
            .iter()
            .map(|(name, description)| format!("  {:<10} {}", name, description))
            .collect();

        Ok(format!("Available commands:\n{}", lines.join("\n")))
    }

    fn priority(&self) -> u8 {
        95
    }
}
