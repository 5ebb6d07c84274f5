use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;

/// `lang` shows the active language, `lang <code>` switches it the way a
/// visitor would through the first language selector.
#[derive(Debug, Default)]
pub struct LanguageCommand;

impl LanguageCommand {
    pub fn new() -> Self {
        Self
    }

    fn show_status(ctx: &SiteContext) -> String {
        let sync = &ctx.synchronizer;
        let available = sync
            .available_languages()
            .iter()
            .map(|lang| lang.as_str().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "[LANG] Current language: {}\n[LANG] Available: {} (fallback {})",
            sync.current_language().as_str().to_uppercase(),
            available,
            sync.fallback_language().as_str().to_uppercase()
        )
    }
}

impl Command for LanguageCommand {
    fn name(&self) -> &'static str {
        "language"
    }

    fn description(&self) -> &'static str {
        "Show or change the page language"
    }

    fn matches(&self, command: &str) -> bool {
        command.trim().to_lowercase().starts_with("lang")
    }

    fn execute(&self, ctx: &mut SiteContext, args: &[&str]) -> Result<String> {
        let Some(&requested) = args.first() else {
            return Ok(Self::show_status(ctx));
        };

        let selector = ctx.synchronizer.bound_selectors().first().cloned();
        let applied = match selector {
            Some(id) => ctx.select(&id, requested),
            None => None,
        }
        .unwrap_or_else(|| ctx.set_language(requested));

        let requested_code = LanguageCode::new(requested);
        if applied == requested_code {
            Ok(format!(
                "[LANG] Language changed to {}",
                applied.as_str().to_uppercase()
            ))
        } else {
            Ok(format!(
                "[LANG] '{}' is not available, using {}",
                requested,
                applied.as_str().to_uppercase()
            ))
        }
    }

    fn priority(&self) -> u8 {
        70
    }
}
