//! User-facing text in each supported language
//!
//! Everything the program itself prints (as opposed to child output) comes
//! from a [`Messages`] catalog, picked once per run.

use crate::types::Language;

/// Static message catalog for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub subtitle: &'static str,
    pub menu_install: &'static str,
    pub menu_remove: &'static str,
    pub menu_quit: &'static str,
    pub prompt: &'static str,
    pub farewell: &'static str,
    pub fetching_available: &'static str,
    pub fetching_installed: &'static str,
    pub install_header: &'static str,
    pub remove_header: &'static str,
    /// `{}` is replaced by the package name
    pub installing: &'static str,
    /// Followed by the comma-joined package names
    pub removing: &'static str,
    pub press_enter: &'static str,
    /// `{tool}` and `{cmd}` are replaced by the tool and its install command
    pub missing_tool: &'static str,
}

const EN: Messages = Messages {
    subtitle: "Package Manager",
    menu_install: "1. [I]nstall - Search packages",
    menu_remove: "2. [R]emove - Delete packages (multi-select)",
    menu_quit: "3. [Q]uit",
    prompt: "Your choice: ",
    farewell: "See you!",
    fetching_available: "Fetching package list... (type to search)",
    fetching_installed: "Fetching installed packages...",
    install_header: "Select a package to INSTALL (Enter)",
    remove_header: "Select package(s) to REMOVE (TAB for multi-select, Enter to confirm)",
    installing: "Installing package {}...",
    removing: "Removing",
    press_enter: "Press Enter to return to the menu...",
    missing_tool: "Error: '{tool}' is required but was not found. Please install it ({cmd}).",
};

const TR: Messages = Messages {
    subtitle: "Paket Yöneticisi",
    menu_install: "1. [Y]ükle - Paket Ara",
    menu_remove: "2. [K]aldır - Paket Sil (Çoklu Seçim)",
    menu_quit: "3. [C]ıkış",
    prompt: "Seçiminiz: ",
    farewell: "Görüşürüz!",
    fetching_available: "Paket listesi getiriliyor... (Aramak için yazın)",
    fetching_installed: "Kurulu paketler getiriliyor...",
    install_header: "YÜKLEMEK için paket seçin (Enter)",
    remove_header: "KALDIRMAK için paket(leri) seçin (TAB ile çoklu seçim, Onaylamak için Enter)",
    installing: "{} paketi yükleniyor...",
    removing: "Kaldırılıyor",
    press_enter: "Menüye dönmek için Enter'a basın...",
    missing_tool: "Hata: '{tool}' gerekli ancak bulunamadı. Lütfen yükleyin ({cmd}).",
};

impl Messages {
    /// Catalog for `language`
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Tr => &TR,
        }
    }

    pub fn installing_line(&self, package: &str) -> String {
        self.installing.replace("{}", package)
    }

    pub fn removing_line(&self, packages: &[String]) -> String {
        format!("{}: {}", self.removing, packages.join(", "))
    }

    /// Error shown when a required tool is absent
    pub fn missing_tool_line(&self, tool: &str, install_cmd: &str) -> String {
        self.missing_tool
            .replace("{tool}", tool)
            .replace("{cmd}", install_cmd)
    }
}
