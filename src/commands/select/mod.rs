use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;

/// Raw "value changed" event from one selector control:
/// `select <selector-id> <code>`.
#[derive(Debug, Default)]
pub struct SelectCommand;

impl Command for SelectCommand {
    fn name(&self) -> &'static str {
        "select"
    }

    fn description(&self) -> &'static str {
        "Fire a change event on a language selector"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "select" | "sel")
    }

    fn execute(&self, ctx: &mut SiteContext, args: &[&str]) -> Result<String> {
        let [selector, value] = args else {
            return Err(AppError::Validation(
                "Usage: select <selector-id> <language>".into(),
            ));
        };

        match ctx.select(selector, value) {
            Some(applied) => {
                let shown = ctx
                    .page
                    .selector_value(selector)
                    .map(|lang| lang.as_str().to_uppercase())
                    .unwrap_or_default();
                Ok(format!(
                    "[SELECT] {} -> {} (selector shows {})",
                    selector,
                    applied.as_str().to_uppercase(),
                    shown
                ))
            }
            None => Ok(format!(
                "[SELECT] '{}' has no change listener, event ignored",
                selector
            )),
        }
    }
}
