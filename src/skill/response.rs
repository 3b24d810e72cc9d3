use serde::Serialize;

/// A simple display card shown next to the spoken response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// The response to one request. Only a [`ResponseBuilder`] can make one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    speech: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reprompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<Card>,

    end_session: bool,
}

impl Response {
    /// Silent response that keeps the session open.
    fn empty() -> Self {
        Self {
            speech: None,
            reprompt: None,
            card: None,
            end_session: false,
        }
    }

    pub fn speech(&self) -> Option<&str> {
        self.speech.as_deref()
    }

    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn end_session(&self) -> bool {
        self.end_session
    }
}

/// Builds a [`Response`]. Sessions stay open unless told otherwise.
#[derive(Debug)]
pub struct ResponseBuilder {
    response: Response,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            response: Response::empty(),
        }
    }

    pub fn speak(mut self, speech: impl Into<String>) -> Self {
        self.response.speech = Some(speech.into());
        self
    }

    pub fn reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.response.reprompt = Some(reprompt.into());
        self
    }

    pub fn simple_card(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.response.card = Some(Card {
            title: title.into(),
            body: body.into(),
        });
        self
    }

    pub fn end_session(mut self, end: bool) -> Self {
        self.response.end_session = end;
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response() {
        let response = ResponseBuilder::new().build();
        assert_eq!(response.speech(), None);
        assert!(!response.end_session());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"endSession": false})
        );
    }

    #[test]
    fn test_full_response_serialization() {
        let response = ResponseBuilder::new()
            .speak("Hello")
            .reprompt("Still there?")
            .simple_card("Title", "Body")
            .end_session(true)
            .build();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "speech": "Hello",
                "reprompt": "Still there?",
                "card": {"title": "Title", "body": "Body"},
                "endSession": true
            })
        );
    }

    #[test]
    fn test_default_builder_matches_new() {
        assert_eq!(ResponseBuilder::default().build(), ResponseBuilder::new().build());
        assert_eq!(
            serde_json::to_value(ResponseBuilder::default().build()).unwrap(),
            json!({"endSession": false})
        );
    }

    #[test]
    fn test_later_calls_overwrite() {
        let response = ResponseBuilder::new().speak("one").speak("two").build();
        assert_eq!(response.speech(), Some("two"));
    }
}
