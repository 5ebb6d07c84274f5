pub mod command;

pub use command::ExitCommand;
