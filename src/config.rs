use crate::i18n::{LocaleTable, LocaleValidator};
use crate::skill::{Skill, DEFAULT_SKILL_INTENT};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub port: u16,
    pub skill_secret: Option<String>,
    pub request_tolerance_secs: u32,

    // Skill
    pub skill_intent_name: String,
    pub locales_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            skill_secret: None,
            request_tolerance_secs: 150,
            skill_intent_name: DEFAULT_SKILL_INTENT.to_string(),
            locales_file: None,
        }
    }
}

/// Parse `REQUEST_TOLERANCE_SECS`.
///
/// # Arguments
/// * `value` - The raw environment value, if set
/// * `default` - Used when the variable is unset or empty
///
/// # Returns
/// * `Ok(secs)` for a positive whole number of seconds
/// * `Err` for zero, negative, oversized or non-numeric values
pub fn parse_tolerance_secs(value: Option<&str>, default: u32) -> Result<u32> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };

    let secs: u32 = raw.parse().with_context(|| {
        format!(
            "REQUEST_TOLERANCE_SECS must be a positive number of seconds, got '{}'",
            raw
        )
    })?;
    if secs == 0 {
        bail!("REQUEST_TOLERANCE_SECS must be greater than zero");
    }
    Ok(secs)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            skill_secret: std::env::var("SKILL_SECRET")
                .ok()
                .filter(|v| !v.is_empty()),
            request_tolerance_secs: parse_tolerance_secs(
                std::env::var("REQUEST_TOLERANCE_SECS").ok().as_deref(),
                defaults.request_tolerance_secs,
            )?,

            skill_intent_name: std::env::var("SKILL_INTENT_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.skill_intent_name),
            locales_file: std::env::var("LOCALES_FILE")
                .ok()
                .filter(|v| !v.is_empty()),
        })
    }

    /// Built-in locales merged with `LOCALES_FILE`, validated.
    pub fn load_locale_table(&self) -> Result<LocaleTable> {
        let mut table = LocaleTable::builtin();
        if let Some(path) = &self.locales_file {
            table.merge(LocaleTable::load_file(path)?);
        }

        let report = LocaleValidator::validate(&table);
        for warning in &report.warnings {
            warn!("Locale table: {}", warning);
        }
        if report.has_errors() {
            bail!("Invalid locale table: {}", report.errors.join("; "));
        }

        Ok(table)
    }

    pub fn build_skill(&self) -> Result<Skill> {
        let table = self.load_locale_table()?;
        Ok(Skill::standard(Arc::new(table), &self.skill_intent_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{Request, CATCHPHRASE};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.skill_intent_name, "menbre");
        assert_eq!(config.request_tolerance_secs, 150);
        assert!(config.skill_secret.is_none());
        assert!(config.locales_file.is_none());
    }

    // ==================== Tolerance Parsing Tests ====================

    #[test]
    fn test_tolerance_unset_uses_default() {
        assert_eq!(parse_tolerance_secs(None, 150).unwrap(), 150);
        assert_eq!(parse_tolerance_secs(Some(""), 150).unwrap(), 150);
    }

    #[test]
    fn test_tolerance_valid() {
        assert_eq!(parse_tolerance_secs(Some("300"), 150).unwrap(), 300);
        assert_eq!(parse_tolerance_secs(Some(" 60 "), 150).unwrap(), 60);
    }

    #[test]
    fn test_tolerance_negative_rejected() {
        let err = parse_tolerance_secs(Some("-1"), 150).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TOLERANCE_SECS"));
    }

    #[test]
    fn test_tolerance_oversized_rejected() {
        assert!(parse_tolerance_secs(Some("9223372036854775807"), 150).is_err());
        assert!(parse_tolerance_secs(Some("4294967296"), 150).is_err());
    }

    #[test]
    fn test_tolerance_zero_and_garbage_rejected() {
        assert!(parse_tolerance_secs(Some("0"), 150).is_err());
        assert!(parse_tolerance_secs(Some("soon"), 150).is_err());
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = Config::default().load_locale_table().expect("Should load");
        assert_eq!(table.locales(), vec!["en"]);
    }

    #[test]
    fn test_locales_file_is_merged() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"es": {{"translation": {{
                "SKILL_NAME": "Menbre",
                "HELP_MESSAGE": "Repite conmigo: \"alexa, oh no\"",
                "HELP_REPROMPT": "¿En qué te puedo ayudar?",
                "FALLBACK_MESSAGE": "¿Estás teniendo un menbre?",
                "FALLBACK_REPROMPT": "¿Estás teniendo un menbre?",
                "ERROR_MESSAGE": "Lo siento, ocurrió un error.",
                "STOP_MESSAGE": ["¡Adiós!", "¡Hasta luego!"]
            }}}}}}"#
        )
        .unwrap();

        let config = Config {
            locales_file: Some(file.path().to_str().unwrap().to_string()),
            ..Config::default()
        };

        let table = config.load_locale_table().expect("Should load");
        assert_eq!(table.locales(), vec!["en", "es"]);
    }

    #[test]
    fn test_incomplete_locales_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"es": {{"translation": {{"SKILL_NAME": "Menbre"}}}}}}"#).unwrap();

        let config = Config {
            locales_file: Some(file.path().to_str().unwrap().to_string()),
            ..Config::default()
        };

        let err = config.load_locale_table().unwrap_err();
        assert!(err.to_string().contains("Invalid locale table"));
    }

    #[test]
    fn test_build_skill_uses_configured_intent() {
        let config = Config {
            skill_intent_name: "ohno".to_string(),
            ..Config::default()
        };

        let skill = config.build_skill().unwrap();
        let response = skill.dispatch(&Request::intent("ohno", "en"));
        assert_eq!(response.speech(), Some(CATCHPHRASE));
    }
}
