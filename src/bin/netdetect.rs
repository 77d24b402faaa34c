//! netdetect - prints the latest installed .NET runtime of a major version.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use netlaunch::runtime::RuntimeList;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Oldest major the `dotnet` muxer reports in this format.
const MIN_REQ_MAJOR: u16 = 5;

/// .NET Runtime Detector
#[derive(Debug, Parser)]
#[command(name = "netdetect", version, about)]
struct Cli {
    /// Major version of .NET runtime to check
    #[arg(long = "req-major", value_name = "MAJOR")]
    req_major: u16,

    /// Print only the minor version
    #[arg(long = "res-minor")]
    res_minor: bool,

    /// Print only the patch version
    #[arg(long = "res-patch")]
    res_patch: bool,

    /// Also check the Windows Desktop runtime
    #[arg(long = "win-desktop")]
    win_desktop: bool,

    /// dotnet executable to query
    #[arg(long, env = "NETDETECT_DOTNET", default_value = "dotnet", hide = true)]
    dotnet: OsString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrintMode {
    Full,
    Minor,
    Patch,
}

impl Cli {
    fn print_mode(&self) -> PrintMode {
        // --res-patch wins when both are given
        if self.res_patch {
            PrintMode::Patch
        } else if self.res_minor {
            PrintMode::Minor
        } else {
            PrintMode::Full
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("NETLAUNCH_LOG").unwrap_or_else(|_| EnvFilter::new("netlaunch=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            return ExitCode::from(code);
        }
    };
    init_tracing();

    if cli.req_major < MIN_REQ_MAJOR {
        eprintln!(
            "--req-major [{}] is too low, use [{}] or later.",
            cli.req_major, MIN_REQ_MAJOR
        );
        return ExitCode::from(1);
    }

    let runtimes = RuntimeList::query(&cli.dotnet);
    if runtimes.is_empty() {
        eprintln!("ERR: .NET Runtime is not installed.");
        return ExitCode::from(1);
    }

    match runtimes.latest_with_major(cli.req_major, cli.win_desktop) {
        Ok(version) => {
            match cli.print_mode() {
                PrintMode::Full => println!("{}", version),
                PrintMode::Minor => println!("{}", version.minor),
                PrintMode::Patch => println!("{}", version.patch),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERR: {}", e);
            ExitCode::from(1)
        }
    }
}
