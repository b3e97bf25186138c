//! External process execution
//!
//! All child processes go through a [`CommandRunner`]. It has two modes:
//!
//! - **interactive**: stdin/stdout/stderr stay on the terminal and the call
//!   blocks until the child exits (package install and removal)
//! - **capture**: a shell pipeline runs under `bash -c` with stdout collected
//!   and stderr left on the terminal (package list piped into the finder)
//!
//! [`SystemRunner`] is the real implementation. The menu and flows only see
//! the trait, so tests drive them with a recording fake.

use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{PkgPickError, Result};
use crate::process_guard::{is_running_as_root, CommandDeathPact};
use crate::sanity::ToolProbe;

/// Shell used for capture-mode pipelines
pub const SHELL: &str = "bash";

/// Default wrapper for privileged invocations
pub const PRIVILEGE_WRAPPER: &str = "sudo";

/// A program plus its arguments.
///
/// `privileged` asks the runner to elevate; the wrapper itself is never part
/// of `args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub privileged: bool,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            privileged: false,
        }
    }

    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Program and arguments after applying `wrapper` when privileged
    pub fn command_line(&self, wrapper: Option<&str>) -> (String, Vec<String>) {
        match (self.privileged, wrapper) {
            (true, Some(wrapper)) => {
                let mut args = Vec::with_capacity(self.args.len() + 1);
                args.push(self.program.clone());
                args.extend(self.args.iter().cloned());
                (wrapper.to_string(), args)
            }
            _ => (self.program.clone(), self.args.clone()),
        }
    }
}

/// How an interactive child finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub success: bool,
}

/// Runs external programs on behalf of the menu
pub trait CommandRunner {
    /// Run attached to the terminal and wait for the child to exit
    fn run_interactive(&mut self, invocation: &Invocation) -> Result<ChildExit>;

    /// Run `command_line` through the shell and return its stdout.
    ///
    /// Spawn failures and non-zero exits are errors.
    fn capture_shell(&mut self, command_line: &str) -> Result<Vec<u8>>;
}

/// Runner that spawns real processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    /// Wrapper for privileged invocations; `None` when root or sudo is absent
    privilege_wrapper: Option<String>,
}

impl SystemRunner {
    /// Use `sudo` for privileged invocations when it is needed and resolvable
    pub fn new(probe: &dyn ToolProbe) -> Self {
        Self::with_privilege_wrapper(choose_privilege_wrapper(is_running_as_root(), probe))
    }

    pub fn with_privilege_wrapper(wrapper: Option<String>) -> Self {
        Self {
            privilege_wrapper: wrapper,
        }
    }

    pub fn privilege_wrapper(&self) -> Option<&str> {
        self.privilege_wrapper.as_deref()
    }
}

/// Wrapper for privileged invocations.
///
/// Root needs none. Without a resolvable `sudo` the command runs unwrapped,
/// so the package manager reports the permission problem itself.
pub fn choose_privilege_wrapper(is_root: bool, probe: &dyn ToolProbe) -> Option<String> {
    if is_root {
        debug!("Running as root, privileged commands run without a wrapper");
        None
    } else if probe.exists(PRIVILEGE_WRAPPER) {
        Some(PRIVILEGE_WRAPPER.to_string())
    } else {
        warn!("{} not found, privileged commands run without a wrapper", PRIVILEGE_WRAPPER);
        None
    }
}

impl CommandRunner for SystemRunner {
    fn run_interactive(&mut self, invocation: &Invocation) -> Result<ChildExit> {
        let (program, args) = invocation.command_line(self.privilege_wrapper());
        info!("run_interactive: {} args={:?}", program, args);

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .with_parent_death_signal()
            .status()
            .map_err(|e| PkgPickError::spawn(&program, e))?;

        let exit = ChildExit {
            code: status.code(),
            success: status.success(),
        };
        debug!("{} finished: {:?}", program, exit);
        Ok(exit)
    }

    fn capture_shell(&mut self, command_line: &str) -> Result<Vec<u8>> {
        debug!("capture_shell: {} -c {:?}", SHELL, command_line);

        let output = Command::new(SHELL)
            .args(["-c", command_line])
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .with_parent_death_signal()
            .output()
            .map_err(|e| PkgPickError::spawn(SHELL, e))?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(PkgPickError::exit_status(SHELL, output.status.code()))
        }
    }
}
