//! Command-line interface.

use crate::matcher::SelectMode;
use clap::{ArgAction, Parser};

/// Stay sane with your multi screen configuration.
///
/// Matches the connected monitors against the layouts in `.monsrc` and
/// applies the most specific one.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "mons",
    version,
    disable_version_flag = true,
    after_help = "Examples:\n  mons\n  mons -o"
)]
pub struct Cli {
    /// Switch to default configuration
    #[arg(short = 'o', long = "off", visible_alias = "reset")]
    pub off: bool,

    /// Output xrandr commands and results
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    pub fn mode(&self) -> SelectMode {
        if self.off {
            SelectMode::Reset
        } else {
            SelectMode::Detect
        }
    }
}
