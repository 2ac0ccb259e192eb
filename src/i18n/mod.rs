//! Internationalization (i18n) module.
//!
//! All user-facing game text lives here, keyed by language and message.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their restart tokens
//! - `language`: Type-safe `Language` handle validated against the registry
//! - `strings`: Message keys and the per-language template tables
//!
//! # Example
//!
//! ```rust
//! use letter_duel::i18n::{get_message, Language, MessageKey};
//!
//! let english = Language::from_code("en").unwrap();
//! assert_eq!(english.message(MessageKey::InvalidWord), "Invalid word. Try again.");
//!
//! // Unknown lookups degrade to an empty string
//! assert_eq!(get_message("InvalidWord", "fr"), "");
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, MessageKey, ENGLISH_STRINGS, LANGUAGE_PROMPT, RUSSIAN_STRINGS};

/// Look up a message template by key name and language code.
///
/// Returns an empty string when either the key or the language is unknown.
pub fn get_message(key: &str, language: &str) -> &'static str {
    match (MessageKey::from_name(key), Language::from_code(language)) {
        (Some(key), Ok(language)) => language.message(key),
        _ => "",
    }
}
