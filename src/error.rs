use thiserror::Error;

/// Failures raised while a request moves through interceptors and handlers.
///
/// Every variant is caught at the dispatcher boundary and turned into the
/// apology response; none of them reach the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("no translation for key '{key}' in locale '{locale}'")]
    LookupFailure { locale: String, key: String },

    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),

    #[error("translation requested before the request was localized")]
    NotLocalized,

    #[error("no handler can handle request of type '{request_type}'")]
    NoHandlerFound { request_type: String },

    #[error("handler '{handler}' failed: {message}")]
    HandlerFailure {
        handler: &'static str,
        message: String,
    },
}

impl SkillError {
    /// True for the lookup family (missing key, unknown locale, no translator).
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            SkillError::LookupFailure { .. }
                | SkillError::UnsupportedLocale(_)
                | SkillError::NotLocalized
        )
    }
}
