use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::Display;

pub const DEFAULT_SOURCE: &str = "fr";
pub const DEFAULT_TARGET: &str = "ru";

/// Which side of the pair an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LanguageSide {
    #[strum(to_string = "source")]
    Source,
    #[strum(to_string = "target")]
    Target,
}

/// Source and target language codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_TARGET)
    }
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    pub fn get(&self, side: LanguageSide) -> &str {
        match side {
            LanguageSide::Source => &self.source,
            LanguageSide::Target => &self.target,
        }
    }

    pub fn set(&mut self, side: LanguageSide, code: impl Into<String>) {
        match side {
            LanguageSide::Source => self.source = code.into(),
            LanguageSide::Target => self.target = code.into(),
        }
    }
}

/// Read-only mapping of display name to language code.
///
/// Lookups are exact: `"French"` does not match a `"french"` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    names: BTreeMap<String, String>,
}

impl LanguageCatalog {
    pub fn new<N, C>(entries: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(name, code)| (name.into(), code.into()))
                .collect(),
        }
    }

    /// True when `code` is either a display name or a code in the catalog.
    pub fn validate(&self, code: &str) -> bool {
        self.names.contains_key(code) || self.names.values().any(|c| c == code)
    }

    /// Maps a display name to its code; anything else is returned unchanged.
    pub fn resolve(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Display name of `code`, if it is a known code.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, c)| c.as_str() == code)
            .map(|(name, _)| name.as_str())
    }

    pub fn validate_pair(&self, pair: &LanguagePair) -> bool {
        self.validate(&pair.source) && self.validate(&pair.target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
