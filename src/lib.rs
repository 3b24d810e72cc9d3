//! Menbre voice skill.
//!
//! Incoming requests pass through interceptors and an ordered handler chain
//! ([`skill::Skill`]); replies are localized through [`i18n::LocaleTable`].

pub mod config;
pub mod envelope;
pub mod error;
pub mod i18n;
pub mod security;
pub mod server;
pub mod skill;

pub use error::SkillError;
