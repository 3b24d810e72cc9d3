use crate::error::SkillError;
use crate::i18n::{LocaleTable, MessageKey};
use rand::Rng;
use regex::{Captures, Regex};
use std::sync::{Arc, OnceLock};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{name}` placeholders; group 1 is the name.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("valid placeholder regex"))
}

/// Translation capability bound to one resolved locale.
///
/// Created per request by the localization interceptor; the table itself is
/// shared and never mutated.
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<LocaleTable>,
    locale: String,
}

impl Translator {
    /// Bind a translator for the locale a request asked for.
    pub fn for_locale(table: Arc<LocaleTable>, requested: &str) -> Result<Self, SkillError> {
        let locale = table
            .resolve(requested)
            .ok_or_else(|| SkillError::UnsupportedLocale(requested.to_string()))?
            .to_string();

        Ok(Self { table, locale })
    }

    /// The stored locale code this translator reads from.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate `key`, substituting `{name}` placeholders from `args`.
    pub fn translate(&self, key: MessageKey, args: &[(&str, &str)]) -> Result<String, SkillError> {
        self.translate_with(key, args, &mut rand::thread_rng())
    }

    /// Same as [`Translator::translate`] with a caller-supplied RNG for
    /// variant selection.
    pub fn translate_with<R: Rng + ?Sized>(
        &self,
        key: MessageKey,
        args: &[(&str, &str)],
        rng: &mut R,
    ) -> Result<String, SkillError> {
        let text = self
            .table
            .lookup(&self.locale, key)
            .and_then(|message| message.pick(rng))
            .ok_or_else(|| SkillError::LookupFailure {
                locale: self.locale.clone(),
                key: key.to_string(),
            })?;

        Ok(substitute(text, args))
    }
}

/// Replace `{name}` placeholders with their values in a single pass.
///
/// Substituted values are never scanned again, and placeholders without a
/// matching argument are left as written.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            args.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
