use crate::commands::context::SiteContext;
use crate::core::prelude::*;

pub trait Command: std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn matches(&self, command: &str) -> bool;

    /// Runs to completion before the next input line is read.
    fn execute(&self, ctx: &mut SiteContext, args: &[&str]) -> Result<String>;

    fn priority(&self) -> u8 {
        50
    }
    fn is_available(&self) -> bool {
        true
    }
}
