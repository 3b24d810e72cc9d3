//! Locale table validation.
//!
//! Checks that every locale can answer every message a handler may ask for,
//! and that translated placeholders line up with the canonical locale.

use crate::i18n::registry::CANONICAL_LOCALE;
use crate::i18n::translator::placeholder_regex;
use crate::i18n::{LocaleTable, Message, MessageKey};
use std::collections::BTreeSet;

/// Findings from checking a locale table before the skill starts serving.
///
/// Errors block startup (a handler could hit a lookup failure); warnings are
/// logged and the table is used anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Missing keys and empty entries, one line per locale/key
    pub errors: Vec<String>,

    /// Placeholder drift against the canonical locale
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Start a report with no findings.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// True if some locale cannot answer every message key.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if some translation's placeholders drifted.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True if every locale is complete and consistent.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale tables.
pub struct LocaleValidator;

/// Placeholder names used anywhere in a message (all variants combined).
fn placeholders(message: &Message) -> BTreeSet<String> {
    message
        .texts()
        .into_iter()
        .flat_map(|text| {
            placeholder_regex()
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

impl LocaleValidator {
    /// Validate every locale in the table.
    ///
    /// # Errors reported
    /// - the table has no locales
    /// - a locale lacks one of [`MessageKey::ALL`]
    /// - an entry is an empty string or an empty variant pool
    ///
    /// # Warnings reported
    /// - an entry's placeholders differ from the canonical locale's entry
    pub fn validate(table: &LocaleTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        if table.is_empty() {
            report.errors.push("No locales configured".to_string());
            return report;
        }

        let canonical = table.strings(CANONICAL_LOCALE);

        for code in table.locales() {
            let Some(strings) = table.strings(code) else {
                continue;
            };

            for key in MessageKey::ALL {
                let Some(message) = strings.get(&key) else {
                    report
                        .errors
                        .push(format!("Locale '{}' is missing {}", code, key));
                    continue;
                };

                let texts = message.texts();
                if texts.is_empty() {
                    report
                        .errors
                        .push(format!("Locale '{}' has an empty variant pool for {}", code, key));
                } else if texts.iter().any(|text| text.trim().is_empty()) {
                    report
                        .errors
                        .push(format!("Locale '{}' has an empty string for {}", code, key));
                }

                if code == CANONICAL_LOCALE {
                    continue;
                }
                if let Some(reference) = canonical.and_then(|c| c.get(&key)) {
                    let expected = placeholders(reference);
                    let found = placeholders(message);
                    if expected != found {
                        report.warnings.push(format!(
                            "Locale '{}' {} placeholders {:?} differ from '{}' {:?}",
                            code, key, found, CANONICAL_LOCALE, expected
                        ));
                    }
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{english_strings, LocaleStrings};

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== Table Validation Tests ====================

    #[test]
    fn test_builtin_table_is_clean() {
        let report = LocaleValidator::validate(&LocaleTable::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_empty_table_is_error() {
        let report = LocaleValidator::validate(&LocaleTable::new());
        assert!(report.has_errors());
        assert!(report.errors[0].contains("No locales"));
    }

    #[test]
    fn test_missing_key_is_error() {
        let mut strings = english_strings();
        strings.remove(&MessageKey::HelpReprompt);
        let table = LocaleTable::builtin().with_locale("es", strings);

        let report = LocaleValidator::validate(&table);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'es'"));
        assert!(report.errors[0].contains("HELP_REPROMPT"));
    }

    #[test]
    fn test_empty_entries_are_errors() {
        let mut strings = english_strings();
        strings.insert(MessageKey::StopMessage, Message::Variants(vec![]));
        strings.insert(MessageKey::SkillName, Message::from("  "));
        let table = LocaleTable::new().with_locale("en", strings);

        let report = LocaleValidator::validate(&table);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_placeholder_mismatch_is_warning() {
        let mut canonical = english_strings();
        canonical.insert(MessageKey::HelpMessage, Message::from("Hi {name}"));
        let mut spanish: LocaleStrings = english_strings();
        spanish.insert(
            MessageKey::HelpMessage,
            Message::Variants(vec!["Hola".to_string(), "Hola {nombre}".to_string()]),
        );

        let table = LocaleTable::new()
            .with_locale("en", canonical)
            .with_locale("es", spanish);

        let report = LocaleValidator::validate(&table);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("HELP_MESSAGE"));
    }
}
