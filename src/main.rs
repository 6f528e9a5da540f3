//! Entry point for the **mons** command.

use clap::Parser;
use mons::app;
use mons::cli::Cli;
use mons::config;
use mons::xrandr::display::XrandrDisplay;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let display = XrandrDisplay::new();
    ExitCode::from(app::execute(&cli, &display, &config::default_locations()))
}

/// Warnings and errors by default, everything down to `debug` with
/// `--verbose`.  `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
