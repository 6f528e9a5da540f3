//! `xrandr`-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`DisplayServer`](crate::traits::DisplayServer) trait, powered by the
//! `xrandr` command-line tool.
//!
//! Nothing outside this module should reference `xrandr` directly.

pub mod display;
pub mod parse;
