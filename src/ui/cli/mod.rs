// Fri Oct 16 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, CheckArgs, Command, LayoutArgs, TypeArgs};
pub use handler::{CommandHandler, EXIT_DIVERGENCE, EXIT_OK};

use clap::Parser;

/// Exit code for usage, configuration and registry errors.
pub const EXIT_ERROR: i32 = 2;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<i32> {
    let args = parse_args();
    let handler = CommandHandler::new()?;
    handler.execute(args)
}
