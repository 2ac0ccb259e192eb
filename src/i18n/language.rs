//! Language type: a validated handle onto a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, MessageKey};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only codes present in the registry can be turned into a `Language`, so every
/// lookup through it is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "ru", "en")
    code: &'static str,
}

impl Language {
    pub const RUSSIAN: Language = Language { code: "ru" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code, already lowercased (e.g., "ru", "en")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```
    /// use letter_duel::i18n::Language;
    ///
    /// assert_eq!(Language::from_code("ru").unwrap(), Language::RUSSIAN);
    /// assert!(Language::from_code("fr").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string (e.g., "ru", "en").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Russian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Русский").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    /// Raw template for `key`, placeholders unsubstituted.
    pub fn message(&self, key: MessageKey) -> &'static str {
        self.strings().get(key)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
