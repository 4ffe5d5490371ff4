// Fri Oct 16 2026 - Alex

use colored::Colorize;
use shader_layout_check::ui::cli::{self, EXIT_ERROR};

fn main() {
    let code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}
