use crate::error::SkillError;
use crate::i18n::MessageKey;
use crate::skill::{Request, RequestContext, RequestType, Response, ResponseBuilder};
use std::error::Error as _;
use tracing::{error, info};

/// Spoken on launch and on the skill's own intent.
pub const CATCHPHRASE: &str = "Oh no, oh no no no; I'm having a menbre!";

/// Skill intent the launch handler answers by default.
pub const DEFAULT_SKILL_INTENT: &str = "menbre";

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Used by the error handler when the request could not be localized.
pub const LITERAL_ERROR_MESSAGE: &str = "Sorry, an error occurred.";

/// The `{can_handle, handle}` pair every routed handler exposes.
pub trait RequestHandler {
    fn name(&self) -> &'static str;

    fn can_handle(&self, request: &Request) -> bool;

    fn handle(&self, context: &RequestContext, request: &Request) -> Result<Response, SkillError>;
}

/// The closed set of routable handlers.
///
/// There is no catch-all variant: the error path is [`ErrorHandler`] and
/// cannot be registered in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerKind {
    /// Launch requests and the skill's own intent
    Launch { intent_name: String },
    Help,
    Fallback,
    /// Cancel and stop intents
    Exit,
    SessionEnded,
}

impl HandlerKind {
    pub fn launch(intent_name: impl Into<String>) -> Self {
        HandlerKind::Launch {
            intent_name: intent_name.into(),
        }
    }

    /// The standard chain, in routing order.
    pub fn standard(intent_name: &str) -> Vec<HandlerKind> {
        vec![
            HandlerKind::launch(intent_name),
            HandlerKind::Help,
            HandlerKind::Fallback,
            HandlerKind::Exit,
            HandlerKind::SessionEnded,
        ]
    }
}

impl RequestHandler for HandlerKind {
    fn name(&self) -> &'static str {
        match self {
            HandlerKind::Launch { .. } => "launch",
            HandlerKind::Help => "help",
            HandlerKind::Fallback => "fallback",
            HandlerKind::Exit => "exit",
            HandlerKind::SessionEnded => "session-ended",
        }
    }

    fn can_handle(&self, request: &Request) -> bool {
        match self {
            HandlerKind::Launch { intent_name } => {
                request.request_type == RequestType::LaunchRequest
                    || request.is_intent(intent_name)
            }
            HandlerKind::Help => request.is_intent(HELP_INTENT),
            HandlerKind::Fallback => request.is_intent(FALLBACK_INTENT),
            HandlerKind::Exit => request.is_intent(CANCEL_INTENT) || request.is_intent(STOP_INTENT),
            HandlerKind::SessionEnded => request.request_type == RequestType::SessionEndedRequest,
        }
    }

    fn handle(&self, context: &RequestContext, request: &Request) -> Result<Response, SkillError> {
        let response = match self {
            HandlerKind::Launch { .. } => ResponseBuilder::new()
                .speak(CATCHPHRASE)
                .simple_card(context.translate(MessageKey::SkillName)?, CATCHPHRASE)
                .build(),
            HandlerKind::Help => ResponseBuilder::new()
                .speak(context.translate(MessageKey::HelpMessage)?)
                .reprompt(context.translate(MessageKey::HelpReprompt)?)
                .build(),
            HandlerKind::Fallback => ResponseBuilder::new()
                .speak(context.translate(MessageKey::FallbackMessage)?)
                .reprompt(context.translate(MessageKey::FallbackReprompt)?)
                .build(),
            HandlerKind::Exit => ResponseBuilder::new()
                .speak(context.translate(MessageKey::StopMessage)?)
                .end_session(true)
                .build(),
            HandlerKind::SessionEnded => {
                info!(
                    "Session ended with reason: {}",
                    request.reason.as_deref().unwrap_or("UNKNOWN")
                );
                ResponseBuilder::new().end_session(true).build()
            }
        };

        Ok(response)
    }
}

/// Last-resort handler for every failure during dispatch.
///
/// Always matches and never fails: if the request was not localized (or the
/// error message itself is missing) it speaks a literal apology.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle(&self, context: &RequestContext, err: &SkillError) -> Response {
        error!("Error handled: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            error!("  caused by: {}", cause);
            source = cause.source();
        }

        let message = context
            .translate(MessageKey::ErrorMessage)
            .unwrap_or_else(|lookup_err| {
                error!("Falling back to literal error message: {}", lookup_err);
                LITERAL_ERROR_MESSAGE.to_string()
            });

        ResponseBuilder::new()
            .speak(message.clone())
            .reprompt(message)
            .build()
    }
}
