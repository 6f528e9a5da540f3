//! One run of mons, from parsed arguments to exit code.
//!
//! Nothing here is global: the parsed [`Cli`], the [`DisplayServer`] and the
//! config search path are all passed in.

use crate::cli::Cli;
use crate::config::{self, ConfigList, Configuration};
use crate::layout;
use crate::matcher::{self, MatchError, SelectMode};
use crate::traits::DisplayServer;
use log::{error, info};
use std::path::PathBuf;

/// Fatal errors of a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("no {} configuration found", config::CONFIG_FILE_NAME)]
    ConfigNotFound,

    /// The display backend failed.
    #[error("display error: {0}")]
    Display(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Query the display, select a configuration and apply it.
///
/// Active outputs are queried before connected ones, and both are queried
/// even in [`SelectMode::Reset`].  Returns the configuration that was applied.
pub fn apply_layout<'a, D: DisplayServer>(
    display: &D,
    configs: &'a ConfigList,
    mode: SelectMode,
) -> Result<&'a Configuration, RunError> {
    let active = display
        .active_outputs()
        .map_err(|e| RunError::Display(e.to_string()))?;
    let connected = display
        .connected_outputs()
        .map_err(|e| RunError::Display(e.to_string()))?;
    info!("active: [{}], connected: [{}]", active.join(", "), connected.join(", "));

    let (index, config) = matcher::select_config(configs, &connected, mode)?;
    info!("applying configuration #{}", index);

    layout::apply_config(display, config, &active)
        .map_err(|e| RunError::Display(e.to_string()))?;
    Ok(config)
}

/// Load the configuration from `locations` and apply it.
pub fn run<D: DisplayServer>(
    cli: &Cli,
    display: &D,
    locations: &[PathBuf],
) -> Result<(), RunError> {
    let (path, configs) = config::find_config(locations).ok_or(RunError::ConfigNotFound)?;
    info!("loaded {} configuration(s) from {}", configs.len(), path.display());
    apply_layout(display, &configs, cli.mode())?;
    Ok(())
}

/// Entry point used by the binary.  Returns the process exit code: `0` on
/// success, `1` after logging any fatal error.
pub fn execute<D: DisplayServer>(cli: &Cli, display: &D, locations: &[PathBuf]) -> u8 {
    match run(cli, display, locations) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
