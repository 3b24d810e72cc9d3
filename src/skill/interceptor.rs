use crate::error::SkillError;
use crate::i18n::{LocaleTable, Translator};
use crate::skill::{Request, RequestContext};
use std::sync::Arc;
use tracing::debug;

/// A hook that runs before handler selection and fills in the context.
pub trait RequestInterceptor: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, context: &mut RequestContext, request: &Request) -> Result<(), SkillError>;
}

/// Binds a [`Translator`] for the request's locale into the context.
#[derive(Debug, Clone)]
pub struct LocalizationInterceptor {
    table: Arc<LocaleTable>,
}

impl LocalizationInterceptor {
    pub fn new(table: Arc<LocaleTable>) -> Self {
        Self { table }
    }
}

impl RequestInterceptor for LocalizationInterceptor {
    fn name(&self) -> &'static str {
        "localization"
    }

    fn process(&self, context: &mut RequestContext, request: &Request) -> Result<(), SkillError> {
        let translator = Translator::for_locale(Arc::clone(&self.table), &request.locale)?;
        debug!(
            "Localized request for '{}' using locale '{}'",
            request.locale,
            translator.locale()
        );
        context.bind_translator(translator);
        Ok(())
    }
}

/// Records what arrived, for handlers and logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogInterceptor;

impl RequestInterceptor for RequestLogInterceptor {
    fn name(&self) -> &'static str {
        "request-log"
    }

    fn process(&self, context: &mut RequestContext, request: &Request) -> Result<(), SkillError> {
        context.set_attribute("requestType", request.request_type.to_string());
        context.set_attribute("locale", request.locale.clone());
        if let Some(name) = request.intent_name() {
            context.set_attribute("intentName", name);
        }
        if let Some(id) = &request.request_id {
            context.set_attribute("requestId", id.clone());
        }

        debug!(
            "Incoming {} (intent: {:?}, locale: '{}')",
            request.request_type,
            request.intent_name(),
            request.locale
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_localization_binds_translator() {
        let interceptor = LocalizationInterceptor::new(Arc::new(LocaleTable::builtin()));
        let mut context = RequestContext::new();

        interceptor
            .process(&mut context, &Request::launch("en-US"))
            .expect("Should localize");

        assert_eq!(context.translator().unwrap().locale(), "en");
    }

    #[test]
    fn test_localization_unsupported_locale_leaves_context_unlocalized() {
        let interceptor = LocalizationInterceptor::new(Arc::new(LocaleTable::builtin()));
        let mut context = RequestContext::new();

        let err = interceptor
            .process(&mut context, &Request::launch("ja-JP"))
            .unwrap_err();

        assert_eq!(err, SkillError::UnsupportedLocale("ja-JP".to_string()));
        assert!(!context.is_localized());
    }

    #[test]
    fn test_request_log_records_attributes() {
        let mut context = RequestContext::new();
        let mut request = Request::intent("AMAZON.HelpIntent", "en");
        request.request_id = Some("req-1".to_string());

        RequestLogInterceptor
            .process(&mut context, &request)
            .unwrap();

        assert_eq!(context.attribute("requestType"), Some(&json!("IntentRequest")));
        assert_eq!(context.attribute("intentName"), Some(&json!("AMAZON.HelpIntent")));
        assert_eq!(context.attribute("locale"), Some(&json!("en")));
        assert_eq!(context.attribute("requestId"), Some(&json!("req-1")));
    }

    #[test]
    fn test_request_log_skips_intent_for_launch() {
        let mut context = RequestContext::new();
        RequestLogInterceptor
            .process(&mut context, &Request::launch("en"))
            .unwrap();
        assert_eq!(context.attribute("intentName"), None);
    }
}
