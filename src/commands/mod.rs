// =====================================================
// FILE: commands/mod.rs
// =====================================================

pub mod command;
pub mod context;
pub mod exit;
pub mod handler;
pub mod help;
pub mod lang;
pub mod logo;
pub mod registry;
pub mod render;
pub mod select;
pub mod show;

pub use command::Command;
pub use context::SiteContext;
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
