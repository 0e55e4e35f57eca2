pub mod chat;
pub mod commands;

pub use chat::ChatLoop;
pub use commands::{run, Cli};
