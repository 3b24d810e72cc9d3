//! Request routing and response dispatch.
//!
//! A [`Skill`] runs its interceptors in registration order, then hands the
//! request to the first handler whose `can_handle` accepts it. Anything that
//! fails on the way is answered by the [`ErrorHandler`].

mod context;
mod dispatcher;
mod handler;
mod interceptor;
mod request;
mod response;

pub use context::RequestContext;
pub use dispatcher::{Skill, SkillBuilder};
pub use handler::{
    ErrorHandler, HandlerKind, RequestHandler, CANCEL_INTENT, CATCHPHRASE, DEFAULT_SKILL_INTENT,
    FALLBACK_INTENT, HELP_INTENT, LITERAL_ERROR_MESSAGE, STOP_INTENT,
};
pub use interceptor::{LocalizationInterceptor, RequestInterceptor, RequestLogInterceptor};
pub use request::{Intent, Request, RequestType};
pub use response::{Card, Response, ResponseBuilder};
