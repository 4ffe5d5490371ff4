// Fri Oct 16 2026 - Alex

pub mod cli;
pub mod table;

pub use cli::{Args, Command, CommandHandler};
pub use table::TableBuilder;
