mod commands;
mod history;

pub use commands::{Command, PASTE_OFFSET};
pub use history::CommandHistory;
