use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    /// Any request type this skill does not know; routes to the error path.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestType::LaunchRequest => "LaunchRequest",
            RequestType::IntentRequest => "IntentRequest",
            RequestType::SessionEndedRequest => "SessionEndedRequest",
            RequestType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
}

/// An incoming request. Read-only once deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: RequestType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub locale: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    /// Why the session ended (SessionEndedRequest only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Request {
    fn new(request_type: RequestType, locale: &str) -> Self {
        Self {
            request_type,
            request_id: None,
            timestamp: None,
            locale: locale.to_string(),
            intent: None,
            reason: None,
        }
    }

    pub fn launch(locale: &str) -> Self {
        Self::new(RequestType::LaunchRequest, locale)
    }

    pub fn intent(name: &str, locale: &str) -> Self {
        Self {
            intent: Some(Intent {
                name: name.to_string(),
            }),
            ..Self::new(RequestType::IntentRequest, locale)
        }
    }

    pub fn session_ended(reason: &str, locale: &str) -> Self {
        Self {
            reason: Some(reason.to_string()),
            ..Self::new(RequestType::SessionEndedRequest, locale)
        }
    }

    /// Intent name, only for intent requests.
    pub fn intent_name(&self) -> Option<&str> {
        match self.request_type {
            RequestType::IntentRequest => self.intent.as_ref().map(|i| i.name.as_str()),
            _ => None,
        }
    }

    /// True if this is an intent request for `name`.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }
}
