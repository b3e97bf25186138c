//! Menu input tokens
//!
//! Maps normalized input lines to [`Action`]s. The default table accepts the
//! menu number plus English and Turkish mnemonics for each entry, so the same
//! keys work regardless of the output language.

use std::collections::HashMap;

use crate::types::Action;

/// Default bilingual tokens: number, Turkish mnemonic, English mnemonic(s)
const DEFAULT_TOKENS: &[(&str, Action)] = &[
    ("1", Action::Install),
    ("y", Action::Install), // Yükle
    ("i", Action::Install),
    ("2", Action::Remove),
    ("k", Action::Remove), // Kaldır
    ("r", Action::Remove),
    ("3", Action::Quit),
    ("c", Action::Quit), // Çıkış
    ("q", Action::Quit),
    ("e", Action::Quit), // exit
];

/// Lookup table from input token to menu action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    map: HashMap<String, Action>,
}

impl TokenTable {
    /// A table with no tokens
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind `token` to `action`, replacing any previous binding.
    ///
    /// The token is stored normalized, so `"Q "` and `"q"` are the same key.
    pub fn bind(&mut self, token: &str, action: Action) -> &mut Self {
        self.map.insert(normalize(token), action);
        self
    }

    /// Remove a binding, returning the action it pointed to
    pub fn unbind(&mut self, token: &str) -> Option<Action> {
        self.map.remove(&normalize(token))
    }

    /// Resolve a raw input line to an action
    pub fn resolve(&self, line: &str) -> Option<Action> {
        self.map.get(&normalize(line)).copied()
    }

    /// All tokens bound to `action`, sorted
    pub fn tokens_for(&self, action: Action) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(t, _)| t.as_str())
            .collect();
        tokens.sort_unstable();
        tokens
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (token, action) in DEFAULT_TOKENS {
            table.bind(token, *action);
        }
        table
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}
