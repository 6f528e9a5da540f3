//! Parsers for `xrandr` query output.

/// Extract connected output names from `xrandr --query`.
///
/// ```text
/// Screen 0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384
/// eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 193mm
///    1920x1080     60.01*+
/// HDMI-1 connected 1920x1080+1920+0 (normal left inverted right x axis y axis) 531mm x 299mm
/// DP-1 disconnected (normal left inverted right x axis y axis)
/// ```
///
/// Only lines containing `" connected"` count, so `disconnected` never
/// matches.  The output name is the first token of the line.
pub fn connected_outputs(query: &str) -> Vec<String> {
    query
        .lines()
        .filter(|line| line.contains(" connected"))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Extract active output names from `xrandr --listmonitors`.
///
/// ```text
/// Monitors: 2
///  0: +*eDP-1 1920/344x1080/193+0+0  eDP-1
///  1: +HDMI-1 1920/531x1080/299+1920+0  HDMI-1
/// ```
///
/// The first line is a header.  The output name is the last token of every
/// following non-blank line.
pub fn active_outputs(listing: &str) -> Vec<String> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}
