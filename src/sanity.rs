//! Pre-flight checks and executable lookup
//!
//! This module answers one question, "is this program on the search path?",
//! and builds the two decisions that depend on it:
//! - the fuzzy finder must be present before the menu starts
//! - `yay` is preferred over `pacman` when it can be found
//!
//! Lookup goes through the [`ToolProbe`] trait so the menu can be tested
//! against a fixed set of installed tools.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::types::PackageManager;

/// Reports whether an executable is resolvable
pub trait ToolProbe {
    fn exists(&self, name: &str) -> bool;
}

/// Probe backed by the real search path
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    /// Explicit search path; `None` means `$PATH`
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl PathProbe {
    /// Probe using the process `$PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe restricted to `search_path` (same syntax as `$PATH`)
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
        }
    }
}

impl ToolProbe for PathProbe {
    fn exists(&self, name: &str) -> bool {
        let found = match &self.search_path {
            Some(path) => which::which_in(name, Some(path), &self.cwd),
            None => which::which(name),
        };
        match found {
            Ok(path) => {
                debug!("Resolved {} to {}", name, path.display());
                true
            }
            Err(e) => {
                debug!("{} not resolvable: {}", name, e);
                false
            }
        }
    }
}

/// Optional binaries (logged if missing, never fatal)
const OPTIONAL_BINARIES: &[&str] = &["yay", "sudo"];

/// Result of environment verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityCheckResult {
    pub missing_binaries: Vec<String>,
}

impl SanityCheckResult {
    /// Returns true if all required tools were found
    pub fn is_ok(&self) -> bool {
        self.missing_binaries.is_empty()
    }
}

/// Check the required tools (just the fuzzy finder) and log missing optional ones
pub fn verify_environment(probe: &dyn ToolProbe, finder: &str) -> SanityCheckResult {
    let mut missing = Vec::new();
    if !probe.exists(finder) {
        missing.push(finder.to_string());
    }

    for binary in OPTIONAL_BINARIES {
        if !probe.exists(binary) {
            debug!("Optional binary not found: {}", binary);
        }
    }

    SanityCheckResult {
        missing_binaries: missing,
    }
}

/// Pick the package manager for one action.
///
/// `yay` wins when allowed and resolvable; otherwise `pacman`, without notice.
pub fn select_manager(probe: &dyn ToolProbe, allow_enhanced: bool) -> PackageManager {
    if allow_enhanced && probe.exists(PackageManager::Yay.binary()) {
        PackageManager::Yay
    } else {
        PackageManager::Pacman
    }
}

/// Map binary names to the Arch Linux package that ships them
pub fn package_for_binary(binary: &str) -> &str {
    match binary {
        "fzf" => "fzf",
        "sk" => "skim",
        "sudo" => "sudo",
        "bash" => "bash",
        other => other,
    }
}
