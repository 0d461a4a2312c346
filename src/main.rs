//! Binary entry point for `update-version`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = update_version::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
