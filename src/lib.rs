#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ops;
pub mod validation;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    command::execute(cli.update)
}
