//! pkgpick library
//!
//! A terminal menu that lists packages from pacman (or yay), lets the user
//! pick through fzf, and runs the install or removal on the terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod flows;
pub mod menu;
pub mod messages;
pub mod process_guard;
pub mod runner;
pub mod sanity;
pub mod screen;
pub mod tokens;
pub mod types;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{PkgPickError, Result};
pub use flows::FlowOutcome;
pub use menu::{Session, Step};
pub use runner::{ChildExit, CommandRunner, Invocation, SystemRunner};
pub use sanity::{PathProbe, ToolProbe};
pub use tokens::TokenTable;
pub use types::{Action, Language, PackageManager};
