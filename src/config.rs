//! Runtime settings
//!
//! pkgpick reads no configuration files. Settings come from the command line
//! and are fixed for the whole run.

use crate::cli::Cli;
use crate::error::{PkgPickError, Result};
use crate::messages::Messages;
use crate::tokens::TokenTable;
use crate::types::Language;

/// Default finder height percentage
pub const DEFAULT_HEIGHT: u8 = 90;

/// Default fuzzy finder executable
pub const DEFAULT_FINDER: &str = "fzf";

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub finder: String,
    pub height: u8,
    pub language: Language,
    /// Use yay when it is on the search path
    pub allow_enhanced: bool,
    pub tokens: TokenTable,
}

impl Settings {
    /// Build settings, rejecting values the finder cannot use
    pub fn new(finder: impl Into<String>, height: u8, language: Language) -> Result<Self> {
        let finder = finder.into();
        if finder.trim().is_empty() {
            return Err(PkgPickError::config("finder executable must not be empty"));
        }
        if !(1..=100).contains(&height) {
            return Err(PkgPickError::config(format!(
                "finder height must be between 1 and 100, got {}",
                height
            )));
        }
        Ok(Self {
            finder,
            height,
            language,
            allow_enhanced: true,
            tokens: TokenTable::default(),
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = Self::new(cli.finder.clone(), cli.height, cli.lang)?;
        settings.allow_enhanced = !cli.no_aur;
        Ok(settings)
    }

    pub fn with_tokens(mut self, tokens: TokenTable) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn messages(&self) -> &'static Messages {
        Messages::for_language(self.language)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finder: DEFAULT_FINDER.to_string(),
            height: DEFAULT_HEIGHT,
            language: Language::default(),
            allow_enhanced: true,
            tokens: TokenTable::default(),
        }
    }
}
