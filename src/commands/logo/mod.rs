use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;
use crate::logo::LogoVariant;

/// `logo [standard|hero|footer] [size]`
#[derive(Debug, Default)]
pub struct LogoCommand;

impl Command for LogoCommand {
    fn name(&self) -> &'static str {
        "logo"
    }

    fn description(&self) -> &'static str {
        "Print logo SVG markup"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "logo" | "svg")
    }

    fn execute(&self, _ctx: &mut SiteContext, args: &[&str]) -> Result<String> {
        let variant = match args.first() {
            None => LogoVariant::Standard,
            Some(name) => LogoVariant::from_name(name).ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown logo '{}'. Use standard, hero or footer",
                    name
                ))
            })?,
        };

        let size = match args.get(1) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => Some(size),
                _ => {
                    return Err(AppError::Validation(format!("Invalid size: {}", raw)));
                }
            },
        };

        Ok(variant.render(size))
    }
}
