//! Picking a configuration for the monitors that are plugged in.
//!
//! Configurations are tried from the end of the list towards the start.  The
//! first one whose outputs are all connected wins, so the most specific
//! layouts belong at the end and the general default at index `0`.

use crate::config::{ConfigList, Configuration};
use log::debug;

/// How the configuration is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Match against the connected outputs.
    #[default]
    Detect,
    /// Always use the default configuration (index `0`).
    Reset,
}

/// Errors from configuration selection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no matching configuration")]
    NoMatchingConfiguration,
    #[error("configuration list is empty")]
    Empty,
}

/// Whether every output referenced by `config` is in `connected`.
///
/// Connected outputs that `config` does not mention are allowed.
pub fn matches(config: &Configuration, connected: &[String]) -> bool {
    config
        .monitors()
        .all(|name| connected.iter().any(|c| c == name))
}

/// Return the highest-indexed configuration that [`matches`] `connected`,
/// together with its index.
pub fn detect_config<'a>(
    configs: &'a ConfigList,
    connected: &[String],
) -> Result<(usize, &'a Configuration), MatchError> {
    configs
        .iter()
        .enumerate()
        .rev()
        .find(|(_, config)| matches(config, connected))
        .ok_or(MatchError::NoMatchingConfiguration)
}

/// Select a configuration according to `mode`.
///
/// [`SelectMode::Reset`] ignores `connected` entirely.
pub fn select_config<'a>(
    configs: &'a ConfigList,
    connected: &[String],
    mode: SelectMode,
) -> Result<(usize, &'a Configuration), MatchError> {
    let selected = match mode {
        SelectMode::Reset => configs
            .default_config()
            .map(|config| (0, config))
            .ok_or(MatchError::Empty)?,
        SelectMode::Detect => detect_config(configs, connected)?,
    };
    debug!("selected configuration #{} ({:?})", selected.0, mode);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitorSpec;

    fn connected(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// `[[eDP-1], [eDP-1, HDMI-1 right of eDP-1]]`
    fn laptop_and_dock() -> ConfigList {
        let mut hdmi = MonitorSpec::new("HDMI-1");
        hdmi.right_of = Some("eDP-1".into());
        ConfigList::new(vec![
            Configuration::new(vec![MonitorSpec::new("eDP-1")]),
            Configuration::new(vec![MonitorSpec::new("eDP-1"), hdmi]),
        ])
    }

    #[test]
    fn most_specific_wins() {
        let configs = laptop_and_dock();
        let (index, config) = detect_config(&configs, &connected(&["eDP-1", "HDMI-1"])).unwrap();
        assert_eq!(index, 1);
        assert_eq!(config, &configs.configs[1]);
    }

    #[test]
    fn falls_back_to_lower_index() {
        let configs = laptop_and_dock();
        let (index, _) = detect_config(&configs, &connected(&["eDP-1"])).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn no_match_is_an_error() {
        let configs = laptop_and_dock();
        assert_eq!(
            detect_config(&configs, &connected(&["HDMI-1"])),
            Err(MatchError::NoMatchingConfiguration)
        );
        assert_eq!(
            detect_config(&ConfigList::default(), &connected(&["eDP-1"])),
            Err(MatchError::NoMatchingConfiguration)
        );
    }

    #[test]
    fn extra_connected_outputs_are_allowed() {
        let configs = laptop_and_dock();
        let (index, _) =
            detect_config(&configs, &connected(&["VGA-1", "HDMI-1", "eDP-1", "DP-2"])).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn identical_configs_prefer_highest_index() {
        let configs = ConfigList::new(vec![
            Configuration::new(vec![MonitorSpec::new("eDP-1")]),
            Configuration::new(vec![MonitorSpec::new("eDP-1")]),
            Configuration::new(vec![MonitorSpec::new("DP-1")]),
        ]);
        let (index, _) = detect_config(&configs, &connected(&["eDP-1"])).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn empty_configuration_always_matches() {
        let configs = ConfigList::new(vec![
            Configuration::default(),
            Configuration::new(vec![MonitorSpec::new("DP-1")]),
        ]);
        let (index, _) = detect_config(&configs, &[]).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn reset_ignores_connected() {
        let configs = laptop_and_dock();
        for names in [&[][..], &["HDMI-1"][..], &["eDP-1", "HDMI-1"][..]] {
            let (index, config) =
                select_config(&configs, &connected(names), SelectMode::Reset).unwrap();
            assert_eq!(index, 0);
            assert_eq!(config, &configs.configs[0]);
        }
    }

    #[test]
    fn reset_on_empty_list_fails() {
        assert_eq!(
            select_config(&ConfigList::default(), &[], SelectMode::Reset),
            Err(MatchError::Empty)
        );
    }

    #[test]
    fn select_detect_delegates() {
        let configs = laptop_and_dock();
        let (index, _) =
            select_config(&configs, &connected(&["eDP-1", "HDMI-1"]), SelectMode::Detect).unwrap();
        assert_eq!(index, 1);
    }
}
