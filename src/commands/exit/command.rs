use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::constants::SIG_EXIT;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the application"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "exit" | "quit" | "q")
    }

    fn execute(&self, ctx: &mut SiteContext, _args: &[&str]) -> Result<String> {
        Ok(format!(
            "{}Goodbye ({})",
            SIG_EXIT,
            ctx.synchronizer.current_language().as_str().to_uppercase()
        ))
    }

    fn priority(&self) -> u8 {
        100
    }
}
