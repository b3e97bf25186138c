use clap::{Parser, Subcommand};

use crate::types::Language;

/// pkgpick - search, install and remove Arch Linux packages with fzf
#[derive(Parser, Debug)]
#[command(name = "pkgpick")]
#[command(about = "A terminal menu for installing and removing packages through fzf")]
#[command(version)]
pub struct Cli {
    /// Language for menu and status lines (en, tr)
    #[arg(long, global = true, default_value = "en")]
    pub lang: Language,

    /// Height of the finder as a percentage of the terminal
    #[arg(long, global = true, default_value_t = 90, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub height: u8,

    /// Fuzzy finder executable
    #[arg(long, global = true, default_value = "fzf")]
    pub finder: String,

    /// Never use yay, even when it is installed
    #[arg(long, global = true)]
    pub no_aur: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Search all packages and install one, then exit
    Install,
    /// Select installed packages and remove them, then exit
    Remove,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
