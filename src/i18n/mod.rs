//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `strings`: message keys, message entries and the built-in English strings
//! - `registry`: the `LocaleTable` mapping locales to their messages
//! - `translator`: per-request translation bound to one resolved locale
//! - `validator`: startup checks that every locale is complete
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::i18n::{LocaleTable, MessageKey, Translator};
//!
//! let table = Arc::new(LocaleTable::builtin());
//! let translator = Translator::for_locale(table, "en-US")?;
//! let goodbye = translator.translate(MessageKey::StopMessage, &[])?;
//! ```

mod registry;
mod strings;
mod translator;
mod validator;

pub use registry::{LocaleTable, CANONICAL_LOCALE};
pub use strings::{english_strings, LocaleStrings, Message, MessageKey, ENGLISH_STRINGS};
pub use translator::{substitute, Translator};
pub use validator::{LocaleValidator, ValidationReport};
