use crate::command::UpdateArgs;
use clap::{ArgAction, Parser};

/// Replace `version = "0.0.0"` in a Cargo.toml with a release version,
/// keeping the original as Cargo.toml.bak.
#[derive(Parser, Debug)]
#[command(name = "update-version", version)]
pub struct Cli {
    #[command(flatten)]
    pub update: UpdateArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
