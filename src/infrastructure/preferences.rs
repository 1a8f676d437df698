//! Persisted source/target language pair.
//!
//! The file is a flat JSON record, `{"source_lang": "fr", "target_lang": "ru"}`,
//! kept in the per-user data directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::{TranslatorError, TranslatorResult},
        language::{LanguageCatalog, LanguagePair, DEFAULT_SOURCE, DEFAULT_TARGET},
    },
    utils::get_data_dir,
};

pub const PREFERENCES_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredLanguages {
    #[serde(default = "default_source")]
    source_lang: String,
    #[serde(default = "default_target")]
    target_lang: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl From<&LanguagePair> for StoredLanguages {
    fn from(pair: &LanguagePair) -> Self {
        Self {
            source_lang: pair.source.clone(),
            target_lang: pair.target.clone(),
        }
    }
}

impl From<StoredLanguages> for LanguagePair {
    fn from(stored: StoredLanguages) -> Self {
        LanguagePair::new(stored.source_lang, stored.target_lang)
    }
}

/// Loads, validates and saves the language pair.
///
/// The store owns the file only; the in-memory pair belongs to the
/// application state.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    path: PathBuf,
    catalog: Arc<LanguageCatalog>,
}

impl LanguageStore {
    pub fn new(path: impl Into<PathBuf>, catalog: Arc<LanguageCatalog>) -> Self {
        Self {
            path: path.into(),
            catalog,
        }
    }

    /// Store at `<data dir>/config.json`
    pub fn in_data_dir(catalog: Arc<LanguageCatalog>) -> Self {
        Self::new(get_data_dir().join(PREFERENCES_FILE), catalog)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> Arc<LanguageCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Reads the persisted pair. A missing, unreadable or invalid file is
    /// replaced by the defaults, which are returned; this never fails.
    pub fn load(&self) -> LanguagePair {
        match self.read() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("{e}; writing defaults to {}", self.path.display());
                let defaults = LanguagePair::default();
                if let Err(e) = self.write(&defaults) {
                    log::error!("Failed to write default languages: {e}");
                }
                defaults
            }
        }
    }

    pub fn validate(&self, code: &str) -> bool {
        self.catalog.validate(code)
    }

    pub fn resolve(&self, code: &str) -> String {
        self.catalog.resolve(code)
    }

    /// Persists `proposed` when both of its codes validate; otherwise (or
    /// when nothing is proposed) persists `held`, the pair currently in
    /// memory. Returns the pair that was written.
    pub fn save(
        &self,
        held: &LanguagePair,
        proposed: Option<&LanguagePair>,
    ) -> TranslatorResult<LanguagePair> {
        let pair = match proposed {
            Some(pair) if self.catalog.validate_pair(pair) => pair,
            Some(pair) => {
                log::warn!(
                    "Rejected language pair {} -> {}; keeping {} -> {}",
                    pair.source,
                    pair.target,
                    held.source,
                    held.target
                );
                held
            }
            None => held,
        };
        self.write(pair)?;
        Ok(pair.clone())
    }

    fn read(&self) -> TranslatorResult<LanguagePair> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| TranslatorError::ConfigCorrupt(format!("{}: {e}", self.path.display())))?;
        let stored: StoredLanguages = serde_json::from_str(&raw)
            .map_err(|e| TranslatorError::ConfigCorrupt(format!("{}: {e}", self.path.display())))?;
        let pair = LanguagePair::from(stored);
        if !self.catalog.validate_pair(&pair) {
            return Err(TranslatorError::ConfigCorrupt(format!(
                "unsupported languages {} -> {}",
                pair.source, pair.target
            )));
        }
        Ok(pair)
    }

    fn write(&self, pair: &LanguagePair) -> TranslatorResult<()> {
        let io_err = |e: io::Error| {
            TranslatorError::ConfigCorrupt(format!("{}: {e}", self.path.display()))
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string(&StoredLanguages::from(pair))
            .map_err(|e| TranslatorError::ConfigCorrupt(e.to_string()))?;
        fs::write(&self.path, json).map_err(io_err)
    }
}
