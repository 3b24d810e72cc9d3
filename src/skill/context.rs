use crate::error::SkillError;
use crate::i18n::{MessageKey, Translator};
use serde_json::Value;
use std::collections::HashMap;

/// Per-request attribute bag.
///
/// Interceptors fill it before any handler runs; handlers only read it. It
/// lives exactly as long as one dispatch.
#[derive(Debug, Default)]
pub struct RequestContext {
    attributes: HashMap<String, Value>,
    translator: Option<Translator>,
}

impl RequestContext {
    /// Create an empty, unlocalized context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an attribute, replacing any previous value under `key`.
    ///
    /// # Arguments
    /// * `key` - Attribute name (e.g., "locale", "intentName")
    /// * `value` - Anything convertible to a JSON value
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute set by an interceptor.
    ///
    /// # Returns
    /// * `Some(&Value)` if an interceptor stored `key`
    /// * `None` otherwise
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// All attributes stored so far.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Make translation available to handlers.
    ///
    /// Called by the localization interceptor once the request's locale has
    /// been resolved; a later call replaces the earlier translator.
    pub fn bind_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    /// The bound translator, if the request was localized.
    pub fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// True once a translator has been bound.
    pub fn is_localized(&self) -> bool {
        self.translator.is_some()
    }

    /// Translate a message for this request's locale.
    ///
    /// # Returns
    /// * `Ok(String)` with the localized text
    /// * `Err(SkillError::NotLocalized)` if no translator is bound
    /// * `Err(SkillError::LookupFailure)` if the locale lacks `key`
    pub fn translate(&self, key: MessageKey) -> Result<String, SkillError> {
        self.translate_with_args(key, &[])
    }

    /// Translate a message, substituting `{name}` placeholders from `args`.
    pub fn translate_with_args(
        &self,
        key: MessageKey,
        args: &[(&str, &str)],
    ) -> Result<String, SkillError> {
        self.translator
            .as_ref()
            .ok_or(SkillError::NotLocalized)?
            .translate(key, args)
    }
}
