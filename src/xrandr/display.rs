//! [`DisplayServer`] implementation backed by the `xrandr` binary.
//!
//! Every query and every layout change is a single blocking child process.
//! Arguments are passed as an argument vector, never through a shell.

use super::parse;
use crate::traits::DisplayServer;
use log::debug;
use std::process::{Command, ExitStatus};

/// Default program name, resolved through `$PATH`.
pub const XRANDR: &str = "xrandr";

/// `xrandr`-backed display server.
#[derive(Debug, Clone)]
pub struct XrandrDisplay {
    program: String,
}

/// Errors that can occur when running `xrandr`.
#[derive(Debug, thiserror::Error)]
pub enum XrandrError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{command} produced non utf-8 output: {source}")]
    Utf8 {
        command: String,
        source: std::string::FromUtf8Error,
    },
}

impl Default for XrandrDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl XrandrDisplay {
    /// Use `xrandr` from `$PATH`.
    pub fn new() -> Self {
        Self::with_program(XRANDR)
    }

    /// Use a different executable, e.g. a wrapper script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program with `args` and return its stdout.
    fn exec(&self, args: &[String]) -> Result<String, XrandrError> {
        let command = command_line(&self.program, args);
        debug!("exec: {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| XrandrError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(XrandrError::Failed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|source| XrandrError::Utf8 {
                command,
                source,
            })?;
        debug!("result: {}", stdout);
        Ok(stdout)
    }
}

/// Render `program args...` the way it would be typed in a shell.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

impl DisplayServer for XrandrDisplay {
    type Error = XrandrError;

    fn connected_outputs(&self) -> Result<Vec<String>, Self::Error> {
        let query = self.exec(&["--query".to_string()])?;
        Ok(parse::connected_outputs(&query))
    }

    fn active_outputs(&self) -> Result<Vec<String>, Self::Error> {
        let listing = self.exec(&["--listmonitors".to_string()])?;
        Ok(parse::active_outputs(&listing))
    }

    fn apply(&self, args: &[String]) -> Result<(), Self::Error> {
        self.exec(args).map(|_| ())
    }
}
