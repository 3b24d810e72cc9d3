use crate::error::SkillError;
use crate::i18n::LocaleTable;
use crate::skill::{
    ErrorHandler, HandlerKind, LocalizationInterceptor, Request, RequestContext,
    RequestHandler, RequestInterceptor, RequestLogInterceptor, Response,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Routes requests through interceptors and the ordered handler chain.
///
/// Immutable once built, so one instance can serve every request.
pub struct Skill {
    interceptors: Vec<Box<dyn RequestInterceptor>>,
    handlers: Vec<HandlerKind>,
    error_handler: ErrorHandler,
}

impl Skill {
    /// Start an empty registration.
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// The standard skill: request logging, localization, then the
    /// launch / help / fallback / exit / session-ended chain.
    pub fn standard(table: Arc<LocaleTable>, intent_name: &str) -> Skill {
        Skill::builder()
            .add_request_handlers(HandlerKind::standard(intent_name))
            .add_request_interceptor(RequestLogInterceptor)
            .add_request_interceptor(LocalizationInterceptor::new(table))
            .build()
    }

    /// Registered handlers in routing order.
    pub fn handlers(&self) -> &[HandlerKind] {
        &self.handlers
    }

    /// Handle one request. Every failure becomes the apology response.
    pub fn dispatch(&self, request: &Request) -> Response {
        let mut context = RequestContext::new();
        match self.try_dispatch(&mut context, request) {
            Ok(response) => response,
            Err(e) => self.error_handler.handle(&context, &e),
        }
    }

    fn try_dispatch(
        &self,
        context: &mut RequestContext,
        request: &Request,
    ) -> Result<Response, SkillError> {
        for interceptor in &self.interceptors {
            interceptor.process(context, request)?;
        }

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.can_handle(request))
            .ok_or_else(|| SkillError::NoHandlerFound {
                request_type: request.request_type.to_string(),
            })?;

        debug!("Routing {} to '{}' handler", request.request_type, handler.name());
        handler.handle(context, request)
    }
}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interceptors: Vec<_> = self.interceptors.iter().map(|i| i.name()).collect();
        f.debug_struct("Skill")
            .field("interceptors", &interceptors)
            .field("handlers", &self.handlers)
            .finish()
    }
}

/// Collects handlers and interceptors in registration order.
#[derive(Default)]
pub struct SkillBuilder {
    interceptors: Vec<Box<dyn RequestInterceptor>>,
    handlers: Vec<HandlerKind>,
}

impl SkillBuilder {
    /// Append handlers to the chain.
    ///
    /// # Arguments
    /// * `handlers` - Handlers in routing order; earlier entries win when two
    ///   of them accept the same request
    pub fn add_request_handlers(mut self, handlers: impl IntoIterator<Item = HandlerKind>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Append an interceptor. Interceptors run in the order they were added,
    /// and the first one to fail sends the request to the error path.
    pub fn add_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Freeze the registration into a [`Skill`].
    pub fn build(self) -> Skill {
        Skill {
            interceptors: self.interceptors,
            handlers: self.handlers,
            error_handler: ErrorHandler,
        }
    }
}
