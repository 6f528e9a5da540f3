//! Turning a selected [`Configuration`] into display directives.
//!
//! A layout is applied in one invocation of the display tool.  Outputs that
//! are active but not part of the configuration are switched off first, then
//! every spec is enabled in file order:
//!
//! ```text
//! --output VGA-1 --off
//! --output eDP-1 --auto --scale 1
//! --output HDMI-1 --primary --auto --scale 1.5 --right-of eDP-1
//! ```
//!
//! The display tool processes directives left to right, so this order is
//! part of the contract.

use crate::config::{Configuration, MonitorSpec};
use crate::traits::DisplayServer;
use log::info;

/// Active outputs that `config` does not mention, in `active` order.
pub fn switch_off<'a>(config: &Configuration, active: &'a [String]) -> Vec<&'a str> {
    active
        .iter()
        .map(String::as_str)
        .filter(|name| !config.references(name))
        .collect()
}

/// Directives that enable one output.
///
/// `--auto` and `--scale` are always present.  Positioning directives are
/// emitted for every anchor that is set, without checking that they agree.
pub fn enable_directives(spec: &MonitorSpec) -> Vec<String> {
    let mut args = vec!["--output".to_string(), spec.monitor.clone()];
    if spec.primary {
        args.push("--primary".into());
    }
    args.push("--auto".into());
    args.push("--scale".into());
    args.push(spec.effective_scale().to_string());

    let anchors = [
        ("--left-of", &spec.left_of),
        ("--right-of", &spec.right_of),
        ("--above", &spec.above),
        ("--below", &spec.below),
    ];
    for (flag, anchor) in anchors {
        if let Some(anchor) = anchor.as_deref().filter(|a| !a.is_empty()) {
            args.push(flag.into());
            args.push(anchor.into());
        }
    }
    args
}

/// The complete argument list: switch-off directives, then enable
/// directives.
pub fn build_args(config: &Configuration, active: &[String]) -> Vec<String> {
    let mut args = Vec::new();
    for name in switch_off(config, active) {
        args.extend(["--output".to_string(), name.to_string(), "--off".to_string()]);
    }
    for spec in &config.specs {
        args.extend(enable_directives(spec));
    }
    args
}

/// Apply `config` through `display`, switching off every output in `active`
/// that the configuration does not use.
pub fn apply_config<D: DisplayServer>(
    display: &D,
    config: &Configuration,
    active: &[String],
) -> Result<(), D::Error> {
    let off = switch_off(config, active);
    if !off.is_empty() {
        info!("switching off {}", off.join(", "));
    }
    let args = build_args(config, active);
    display.apply(&args)
}
