//! Fuzzy finder command lines
//!
//! Package lists are fed to the finder through a shell pipe
//! (`pacman -Slq | fzf ...`), so this module builds both the finder's flag
//! list and the quoted pipeline string handed to `bash -c`.

use crate::types::PackageManager;

/// Placeholder the finder substitutes with the highlighted line
pub const PREVIEW_PLACEHOLDER: &str = "{}";

/// Options for one finder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOptions {
    /// Finder executable (normally `fzf`)
    pub program: String,
    /// Screen height percentage, 1..=100
    pub height: u8,
    pub header: String,
    /// Preview command with `{}` in place of the highlighted entry
    pub preview: Option<String>,
    pub multi: bool,
}

impl FinderOptions {
    pub fn new(program: impl Into<String>, height: u8, header: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            height,
            header: header.into(),
            preview: None,
            multi: false,
        }
    }

    pub fn preview(mut self, command: impl Into<String>) -> Self {
        self.preview = Some(command.into());
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Finder arguments, unquoted
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.multi {
            args.push("-m".to_string());
        }
        if let Some(preview) = &self.preview {
            args.push("--preview".to_string());
            args.push(preview.clone());
        }
        args.push("--layout=reverse".to_string());
        args.push(format!("--height={}%", self.height));
        args.push(format!("--header={}", self.header));
        args
    }

    /// Shell pipeline feeding `list_command` output into the finder
    pub fn pipeline(&self, list_command: &str) -> String {
        let finder = std::iter::once(shell_quote(&self.program))
            .chain(self.to_args().iter().map(|a| shell_quote(a)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} | {}", list_command, finder)
    }
}

/// `<mgr> -Slq`: every package name in the sync repositories (and the AUR for yay)
pub fn list_available(manager: PackageManager) -> String {
    format!("{} -Slq", manager.binary())
}

/// `pacman -Qq`: names of installed packages
pub fn list_installed(manager: PackageManager) -> String {
    format!("{} -Qq", manager.binary())
}

/// `<mgr> -Si {}`: sync database info for the highlighted package
pub fn preview_available(manager: PackageManager) -> String {
    format!("{} -Si {}", manager.binary(), PREVIEW_PLACEHOLDER)
}

/// `pacman -Qi {}`: local database info for the highlighted package
pub fn preview_installed(manager: PackageManager) -> String {
    format!("{} -Qi {}", manager.binary(), PREVIEW_PLACEHOLDER)
}

/// Quote a word for a POSIX shell.
///
/// Words made only of safe characters pass through unchanged; anything else
/// is wrapped in single quotes with embedded quotes spliced as `'\''`.
pub fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=%+:,@".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
