// commands/lang/mod.rs

pub mod command;

pub use command::LanguageCommand;
