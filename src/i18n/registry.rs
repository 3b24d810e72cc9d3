//! Locale table: every supported locale and its messages.
//!
//! The table is built once at startup (built-in English plus an optional
//! resource file), validated, then shared read-only behind an `Arc`.

use crate::i18n::strings::{english_strings, LocaleStrings, Message, MessageKey};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

/// Code of the canonical locale that other locales are checked against.
pub const CANONICAL_LOCALE: &str = "en";

/// Maps locale code to that locale's messages.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    locales: HashMap<String, LocaleStrings>,
}

/// One locale in a resource file: `{ "translation": { KEY: text | [texts] } }`
#[derive(Debug, Deserialize)]
struct ResourceLocale {
    translation: BTreeMap<String, Message>,
}

impl LocaleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the skill (English only).
    pub fn builtin() -> Self {
        Self::new().with_locale(CANONICAL_LOCALE, english_strings())
    }

    /// Add (or replace) a locale, builder style.
    pub fn with_locale(mut self, code: impl Into<String>, strings: LocaleStrings) -> Self {
        self.insert_locale(code, strings);
        self
    }

    /// Add (or replace) a locale.
    pub fn insert_locale(&mut self, code: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(code.into(), strings);
    }

    /// Merge another table into this one. Entries of `other` win per key.
    pub fn merge(&mut self, other: LocaleTable) {
        for (code, strings) in other.locales {
            self.locales.entry(code).or_default().extend(strings);
        }
    }

    /// Find the stored locale code serving `requested`.
    ///
    /// Exact match first, then the primary language subtag
    /// (`en-US` and `en_GB` both resolve to `en`).
    pub fn resolve(&self, requested: &str) -> Option<&str> {
        if let Some((code, _)) = self.locales.get_key_value(requested) {
            return Some(code.as_str());
        }

        let language = requested.split(['-', '_']).next()?;
        self.locales
            .get_key_value(language)
            .map(|(code, _)| code.as_str())
    }

    /// Look up one entry of an exact locale code.
    pub fn lookup(&self, code: &str, key: MessageKey) -> Option<&Message> {
        self.locales.get(code).and_then(|strings| strings.get(&key))
    }

    /// Messages of an exact locale code.
    pub fn strings(&self, code: &str) -> Option<&LocaleStrings> {
        self.locales.get(code)
    }

    /// All locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Parse a JSON resource document.
    ///
    /// Unknown message keys are skipped with a warning; they can never be
    /// requested by a handler.
    pub fn from_resources_json(json: &str) -> Result<Self> {
        let resources: BTreeMap<String, ResourceLocale> =
            serde_json::from_str(json).context("Failed to parse locale resources")?;

        let mut table = LocaleTable::new();
        for (code, resource) in resources {
            let mut strings = LocaleStrings::new();
            for (name, message) in resource.translation {
                match name.parse::<MessageKey>() {
                    Ok(key) => {
                        strings.insert(key, message);
                    }
                    Err(e) => warn!("Ignoring entry in locale '{}': {}", code, e),
                }
            }
            table.insert_locale(code, strings);
        }

        Ok(table)
    }

    /// Load a JSON resource file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file {}", path.display()))?;
        let table = Self::from_resources_json(&json)
            .with_context(|| format!("Invalid locale file {}", path.display()))?;
        info!(
            "Loaded {} locale(s) from {}: {:?}",
            table.locales.len(),
            path.display(),
            table.locales()
        );
        Ok(table)
    }
}
