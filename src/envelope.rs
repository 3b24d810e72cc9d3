//! Voice platform envelopes wrapped around the core request and response.

use crate::skill::{Request, Response};
use serde::{Deserialize, Serialize};

pub const ENVELOPE_VERSION: &str = "1.0";

fn default_version() -> String {
    ENVELOPE_VERSION.to_string()
}

// Inbound envelope types
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    pub session: Option<Session>,
    pub request: Request,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: Option<String>,
    #[serde(default)]
    pub new: bool,
}

/// Either a full platform envelope or a bare request.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InboundEnvelope {
    Hosted(RequestEnvelope),
    Bare(Request),
}

impl InboundEnvelope {
    pub fn into_request(self) -> Request {
        match self {
            InboundEnvelope::Hosted(envelope) => envelope.request,
            InboundEnvelope::Bare(request) => request,
        }
    }
}

// Outbound envelope types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: HostedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<HostedCard>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostedCard {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

/// Escape the characters SSML cannot carry as text.
pub fn escape_ssml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

impl From<&Response> for ResponseEnvelope {
    fn from(response: &Response) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: HostedResponse {
                output_speech: response.speech().map(OutputSpeech::ssml),
                reprompt: response.reprompt().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                card: response.card().map(|card| HostedCard {
                    card_type: "Simple".to_string(),
                    title: card.title.clone(),
                    content: card.body.clone(),
                }),
                should_end_session: response.end_session(),
            },
        }
    }
}
