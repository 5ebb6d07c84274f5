use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;
use crate::localization::Content;

#[derive(Debug, Default)]
pub struct ShowCommand;

impl ShowCommand {
    fn describe(id: &str, content: &Content) -> String {
        let kind = if content.is_markup() { "html" } else { "text" };
        format!("{:<20} [{}] {}", id, kind, content.as_str())
    }
}

impl Command for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "Show page elements and their current content"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "show" | "ls")
    }

    fn execute(&self, ctx: &mut SiteContext, args: &[&str]) -> Result<String> {
        let page = &ctx.page;

        if let Some(&id) = args.first() {
            return page
                .content(id)
                .map(|content| Self::describe(id, content))
                .ok_or_else(|| AppError::Validation(format!("No element with id '{}'", id)));
        }

        let mut lines: Vec<String> = page
            .element_ids()
            .filter_map(|id| page.content(id).map(|content| Self::describe(id, content)))
            .collect();

        for selector in ctx.synchronizer.bound_selectors() {
            let value = page
                .selector_value(selector)
                .map(|lang| lang.as_str().to_string())
                .unwrap_or_else(|| "-".into());
            lines.push(format!("{:<20} [select] {}", selector, value));
        }

        if let Some(href) = page.download_href() {
            lines.push(format!("{:<20} [link] {}", "download-link", href));
        }

        Ok(lines.join("\n"))
    }
}
