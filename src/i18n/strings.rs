use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a localized message.
///
/// Handlers only ever ask for these keys, so the set is closed. In resource
/// files they appear under their SCREAMING_SNAKE_CASE names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    SkillName,
    HelpMessage,
    HelpReprompt,
    FallbackMessage,
    FallbackReprompt,
    ErrorMessage,
    StopMessage,
}

impl MessageKey {
    /// Every key a complete locale must provide.
    pub const ALL: [MessageKey; 7] = [
        MessageKey::SkillName,
        MessageKey::HelpMessage,
        MessageKey::HelpReprompt,
        MessageKey::FallbackMessage,
        MessageKey::FallbackReprompt,
        MessageKey::ErrorMessage,
        MessageKey::StopMessage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::SkillName => "SKILL_NAME",
            MessageKey::HelpMessage => "HELP_MESSAGE",
            MessageKey::HelpReprompt => "HELP_REPROMPT",
            MessageKey::FallbackMessage => "FALLBACK_MESSAGE",
            MessageKey::FallbackReprompt => "FALLBACK_REPROMPT",
            MessageKey::ErrorMessage => "ERROR_MESSAGE",
            MessageKey::StopMessage => "STOP_MESSAGE",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match MessageKey::ALL.iter().find(|key| key.as_str() == s) {
            Some(key) => Ok(*key),
            None => bail!("Unknown message key: '{}'", s),
        }
    }
}

/// A localized entry: either one fixed string or a pool of variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Single(String),
    Variants(Vec<String>),
}

impl Message {
    /// Pick the text to speak. Variant pools are sampled uniformly.
    ///
    /// Returns `None` for an empty variant pool.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self {
            Message::Single(text) => Some(text.as_str()),
            Message::Variants(variants) => variants.choose(rng).map(String::as_str),
        }
    }

    /// All texts this entry can produce.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Message::Single(text) => vec![text.as_str()],
            Message::Variants(variants) => variants.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Single(text.to_string())
    }
}

/// Messages of one locale.
pub type LocaleStrings = HashMap<MessageKey, Message>;

// ==================== English Strings ====================

/// English strings (canonical locale).
pub const ENGLISH_STRINGS: [(MessageKey, &str); 7] = [
    (MessageKey::SkillName, "Menbre"),
    (MessageKey::HelpMessage, "Repeat after me: \"alexa, oh no\""),
    (MessageKey::HelpReprompt, "What can I help you with?"),
    (MessageKey::FallbackMessage, "Are you having a menbre?"),
    (MessageKey::FallbackReprompt, "Are you having a menbre?"),
    (MessageKey::ErrorMessage, "Sorry, an error occurred."),
    (MessageKey::StopMessage, "Goodbye!"),
];

/// Build the English locale strings.
pub fn english_strings() -> LocaleStrings {
    ENGLISH_STRINGS
        .iter()
        .map(|(key, text)| (*key, Message::from(*text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ==================== MessageKey Tests ====================

    #[test]
    fn test_key_names_roundtrip_through_from_str() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = "WELCOME_MESSAGE".parse::<MessageKey>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(MessageKey::StopMessage.to_string(), "STOP_MESSAGE");
    }

    // ==================== Message Tests ====================

    #[test]
    fn test_single_message_always_picks_itself() {
        let mut rng = StdRng::seed_from_u64(7);
        let message = Message::from("Goodbye!");
        for _ in 0..10 {
            assert_eq!(message.pick(&mut rng), Some("Goodbye!"));
        }
    }

    #[test]
    fn test_empty_variants_pick_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Message::Variants(vec![]).pick(&mut rng), None);
    }

    #[test]
    fn test_message_deserializes_string_or_list() {
        let single: Message = serde_json::from_str(r#""Hola""#).unwrap();
        assert_eq!(single, Message::Single("Hola".to_string()));

        let pool: Message = serde_json::from_str(r#"["Adiós", "Chao"]"#).unwrap();
        assert_eq!(
            pool,
            Message::Variants(vec!["Adiós".to_string(), "Chao".to_string()])
        );
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_covers_every_key() {
        let strings = english_strings();
        for key in MessageKey::ALL {
            assert!(strings.contains_key(&key), "missing {}", key);
        }
    }

    #[test]
    fn test_english_values() {
        let strings = english_strings();
        assert_eq!(strings[&MessageKey::SkillName], Message::from("Menbre"));
        assert_eq!(strings[&MessageKey::StopMessage], Message::from("Goodbye!"));
        assert_eq!(
            strings[&MessageKey::ErrorMessage],
            Message::from("Sorry, an error occurred.")
        );
    }
}
