//! Error handling module for pkgpick
//!
//! Provides the crate-wide error type using thiserror. Most failures inside a
//! flow are deliberately non-fatal; callers decide whether an error aborts the
//! current flow or the whole process via [`PkgPickError::exit_code`].

use thiserror::Error;

/// Main error type for pkgpick
#[derive(Error, Debug)]
pub enum PkgPickError {
    /// IO errors (terminal reads and writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A child process could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process ran but exited unsuccessfully
    #[error("{program} exited with {reason}")]
    ExitStatus {
        program: String,
        /// Exit code, `None` if the child was killed by a signal
        code: Option<i32>,
        reason: String,
    },

    /// A required executable is not on the search path
    #[error("required tool not found: {0}")]
    MissingTool(String),

    /// Invalid settings (command-line values out of range)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for pkgpick operations
pub type Result<T> = std::result::Result<T, PkgPickError>;

impl PkgPickError {
    /// Create a spawn error for `program`
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create an exit status error for `program`
    pub fn exit_status(program: impl Into<String>, code: Option<i32>) -> Self {
        let reason = match code {
            Some(c) => format!("status {}", c),
            None => "a signal".to_string(),
        };
        Self::ExitStatus {
            program: program.into(),
            code,
            reason,
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(name: impl Into<String>) -> Self {
        Self::MissingTool(name.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for an error that reaches `main`.
    ///
    /// Every error that escapes the menu is a startup failure and maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
