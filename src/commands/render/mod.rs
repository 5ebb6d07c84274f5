use crate::commands::command::Command;
use crate::commands::context::SiteContext;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct RenderCommand;

impl Command for RenderCommand {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Print the localized page as HTML"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "render" | "html")
    }

    fn execute(&self, ctx: &mut SiteContext, _args: &[&str]) -> Result<String> {
        Ok(format!(
            "<html lang=\"{}\">\n<body>\n{}</body>\n</html>",
            ctx.synchronizer.current_language(),
            ctx.page.render_html()
        ))
    }
}
