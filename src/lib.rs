// Module definitions
pub mod commands;
pub mod core;
pub mod i18n;
pub mod localization;
pub mod logo;
pub mod setup;

// Essential re-exports
pub use crate::commands::{Command, CommandHandler, CommandRegistry, SiteContext};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::localization::{LocalizationSynchronizer, Page, RenderTarget};

use std::sync::Arc;

pub fn create_default_registry() -> CommandRegistry {
    use crate::commands::{
        exit::ExitCommand, help::HelpCommand, lang::LanguageCommand, logo::LogoCommand,
        render::RenderCommand, select::SelectCommand, show::ShowCommand,
    };

    let mut registry = CommandRegistry::new();

    registry.register(ExitCommand);
    registry.register(HelpCommand::new());
    registry.register(LanguageCommand::new());
    registry.register(SelectCommand);
    registry.register(ShowCommand);
    registry.register(RenderCommand);
    registry.register(LogoCommand);

    registry.initialize();
    registry
}

/// Loads the embedded dictionaries and runs the startup pass.
pub fn bootstrap(config: &Config, ephemeral: bool) -> Result<SiteContext> {
    let table = i18n::load_embedded(&config.language.fallback)?;
    Ok(SiteContext::bootstrap(config, Arc::new(table), ephemeral))
}
