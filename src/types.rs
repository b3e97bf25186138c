//! Type-safe values shared across pkgpick
//!
//! Menu actions, output languages and package manager identities are enums
//! rather than strings so dispatch is exhaustive.

use strum::{Display, EnumIter, EnumString};

/// An action the menu can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Install,
    Remove,
    Quit,
}

/// Output language for banner, menu and status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Tr,
}

/// Package manager front-end used for listing and installing
///
/// `Yay` wraps `pacman` and additionally sees the AUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pacman,
    Yay,
}

impl PackageManager {
    /// Executable name on the search path
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Yay => "yay",
        }
    }

    /// Whether this manager can also reach the AUR
    pub fn is_enhanced(&self) -> bool {
        matches!(self, Self::Yay)
    }
}
