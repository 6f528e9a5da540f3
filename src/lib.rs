//! **mons** — stay sane with your multi screen configuration.
//!
//! A `.monsrc` file lists layouts from most general (index `0`, the
//! default) to most specific.  On every run mons asks the display server
//! which outputs are connected and which are active, picks the last layout
//! whose outputs are all connected, and applies it in a single display
//! command: unused active outputs are switched off, configured ones are
//! enabled, scaled and positioned.
//!
//! # Architecture
//!
//! * [`config`] — `.monsrc` schema and lookup.
//! * [`matcher`] — choosing a layout for the connected outputs.
//! * [`layout`] — turning a layout into display directives.
//! * [`traits::DisplayServer`] — the seam to the display subsystem, with the
//!   concrete backend in [`xrandr`].
//! * [`app`] — one run from parsed [`cli::Cli`] arguments to an exit code.

pub mod app;
pub mod cli;
pub mod config;
pub mod layout;
pub mod matcher;
pub mod traits;
pub mod xrandr;
