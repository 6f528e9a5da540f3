//! Layout configuration.
//!
//! The configuration lives in a JSON file called `.monsrc`, looked up first
//! in the current working directory and then in the user's home directory.
//! The top level is an array of configurations; each configuration is an
//! array of monitor specs.
//!
//! Configurations are matched from last to first, so the most specific
//! layouts belong at the end.  The first entry is the default layout used
//! by `mons -o`.
//!
//! # Example
//!
//! ```json
//! [
//!   [ { "monitor": "eDP-1", "primary": true } ],
//!   [
//!     { "monitor": "eDP-1" },
//!     { "monitor": "HDMI-1", "primary": true, "rightOf": "eDP-1", "scale": 1.5 }
//!   ]
//! ]
//! ```

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name searched for in every candidate location.
pub const CONFIG_FILE_NAME: &str = ".monsrc";

/// Desired state of a single output within a [`Configuration`].
///
/// Unknown keys are ignored.  Only `monitor` is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSpec {
    /// Output name as reported by the display server (e.g. `"eDP-1"`).
    pub monitor: String,

    /// Make this output the primary display.
    #[serde(default)]
    pub primary: bool,

    /// Scale factor.  Absent (or `0`) means `1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,

    /// Place this output left of the named output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_of: Option<String>,

    /// Place this output right of the named output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_of: Option<String>,

    /// Place this output above the named output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<String>,

    /// Place this output below the named output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<String>,
}

impl MonitorSpec {
    /// A spec for `monitor` with every optional field unset.
    pub fn new(monitor: impl Into<String>) -> Self {
        Self {
            monitor: monitor.into(),
            ..Self::default()
        }
    }

    /// The effective scale factor.
    pub fn effective_scale(&self) -> f64 {
        match self.scale {
            Some(s) if s != 0.0 => s,
            _ => 1.0,
        }
    }
}

/// One complete desired layout: an ordered list of [`MonitorSpec`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    pub specs: Vec<MonitorSpec>,
}

impl Configuration {
    pub fn new(specs: Vec<MonitorSpec>) -> Self {
        Self { specs }
    }

    /// Output names referenced by this configuration, in spec order.
    pub fn monitors(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.monitor.as_str())
    }

    /// Whether any spec controls `monitor`.
    pub fn references(&self, monitor: &str) -> bool {
        self.specs.iter().any(|s| s.monitor == monitor)
    }

    /// Output names that appear in more than one spec.
    pub fn duplicate_monitors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for name in self.monitors() {
            if !seen.insert(name) && !dups.contains(&name) {
                dups.push(name);
            }
        }
        dups
    }
}

/// All configurations from a `.monsrc`, in file order.
///
/// Index `0` is the default layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigList {
    pub configs: Vec<Configuration>,
}

impl ConfigList {
    pub fn new(configs: Vec<Configuration>) -> Self {
        Self { configs }
    }

    /// Load a configuration list from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        list.warn_duplicates(path);
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.configs.get(index)
    }

    /// The default layout (index `0`).
    pub fn default_config(&self) -> Option<&Configuration> {
        self.configs.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.configs.iter()
    }

    // Duplicates are allowed; the display tool processes directives left to
    // right so the last spec for an output wins.
    fn warn_duplicates(&self, path: &Path) {
        for (i, config) in self.configs.iter().enumerate() {
            for name in config.duplicate_monitors() {
                warn!(
                    "{}: configuration #{} lists {} more than once, the last entry wins",
                    path.display(),
                    i,
                    name
                );
            }
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Candidate directories: the current working directory, then `$HOME`.
///
/// A location that cannot be resolved is left out.
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::with_capacity(2);
    match std::env::current_dir() {
        Ok(cwd) => locations.push(cwd),
        Err(e) => debug!("cannot resolve current directory: {}", e),
    }
    match dirs::home_dir() {
        Some(home) => locations.push(home),
        None => debug!("cannot resolve home directory"),
    }
    locations
}

/// Search `locations` in order for a `.monsrc` and return the first one that
/// parses, together with its path.
///
/// Files that fail to read or parse are reported and skipped.  Nothing is
/// merged across locations.
pub fn find_config(locations: &[PathBuf]) -> Option<(PathBuf, ConfigList)> {
    for location in locations {
        let path = location.join(CONFIG_FILE_NAME);
        debug!("checking config file {}", path.display());

        if !path.exists() {
            continue;
        }

        match ConfigList::load(&path) {
            Ok(list) => {
                debug!("using config {}", path.display());
                return Some((path, list));
            }
            Err(e) => error!("{}", e),
        }
    }
    None
}
