//! The creature roster.
//!
//! Loaded once per run from the roster file at the asset root and never
//! modified afterwards. Entries are numbered from 1 in file order, matching
//! the numbering used by the generation table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assets::AssetStore;
use crate::error::Result;
use crate::language::Language;

/// One selectable creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier used to find the art (case-insensitive)
    pub path: String,
    /// Display name per language
    pub names: HashMap<Language, String>,
    /// Form identifiers, in file order
    #[serde(default)]
    pub forms: Vec<String>,
}

impl Entry {
    /// Display name in `language`, or "" when the language is unknown or the
    /// entry has no name for it.
    pub fn name(&self, language: Option<Language>) -> &str {
        language
            .and_then(|lang| self.names.get(&lang))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn matches(&self, identifier: &str) -> bool {
        self.path.eq_ignore_ascii_case(identifier)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_slice(bytes)?;
        Ok(Self::new(entries))
    }

    /// Read and parse the roster from `store`.
    pub fn load(store: &dyn AssetStore) -> Result<Self> {
        let bytes = store.read_roster()?;
        let roster = Self::from_json(&bytes)?;
        log::debug!("loaded roster with {} entries", roster.len());
        Ok(roster)
    }

    /// Entry by 1-based roster number.
    pub fn get(&self, number: usize) -> Option<&Entry> {
        number.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Number and entry for an identifier, compared case-insensitively.
    pub fn find(&self, identifier: &str) -> Option<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.matches(identifier))
            .map(|(i, entry)| (i + 1, entry))
    }

    /// Entries with their 1-based numbers.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
