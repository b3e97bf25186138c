//! pkgpick - main entry point
//!
//! Parses the command line, sets up logging and hands the terminal to a
//! [`Session`].

use std::io::{stdin, stdout};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use pkgpick::cli::{Cli, Commands};
use pkgpick::{Action, PathProbe, PkgPickError, Session, Settings, SystemRunner};

/// Initialize tracing on stderr; `RUST_LOG` overrides the `-v` level
fn init_logger(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_cli(cli).context("invalid settings")?;
    debug!("Settings: {:?}", settings);

    let probe = PathProbe::new();
    let mut session = Session::new(
        settings,
        SystemRunner::new(&probe),
        probe,
        stdin().lock(),
        stdout(),
    );

    match cli.command {
        Some(Commands::Install) => session.run_action(Action::Install)?,
        Some(Commands::Remove) => session.run_action(Action::Remove)?,
        None => session.run()?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logger(cli.log_level());
    info!("pkgpick starting up");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<PkgPickError>()
                .map_or(1, PkgPickError::exit_code);
            match e.downcast_ref::<PkgPickError>() {
                // Already reported to the user by the pre-flight check
                Some(PkgPickError::MissingTool(tool)) => {
                    debug!("Exiting: {} not found", tool);
                }
                _ => {
                    error!("{:#}", e);
                    eprintln!("pkgpick: {:#}", e);
                }
            }
            ExitCode::from(code)
        }
    }
}
