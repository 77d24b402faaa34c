//! netlaunch entry point.

#![cfg_attr(windows, windows_subsystem = "windows")]

use std::process::ExitCode;

use netlaunch::bootstrap::{Bootstrap, Outcome};
use netlaunch::config::load_launcher_config;
use netlaunch::install::resolve_install_dir;
use netlaunch::launch::default_launcher;
use netlaunch::runtime::probe_for;
use netlaunch::ui::create_ui;
use netlaunch::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "NETLAUNCH_LOG";

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `NETLAUNCH_LOG` when set, otherwise WARN.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("netlaunch=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &[String]) -> Result<Outcome> {
    let install_dir = resolve_install_dir()?;
    let config = load_launcher_config(&install_dir)?;
    let probe = probe_for(&config.prerequisite)?;
    let mut launcher = default_launcher();
    let mut ui = create_ui();

    Bootstrap::new(&config, probe.as_ref(), launcher.as_mut(), ui.as_mut())
        .run(&install_dir, args)
}

fn main() -> ExitCode {
    init_tracing();

    // Arguments are opaque; nothing here is parsed
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    tracing::debug!("netlaunch starting with args: {:?}", args);

    match run(&args) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
