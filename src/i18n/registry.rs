//! Language registry: Single source of truth for all supported languages.
//!
//! Each entry carries the language's message table and the tokens it uses to
//! answer the play-again prompt. The registry is built once behind a `OnceLock`.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, RUSSIAN_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ru", "en")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language (e.g., "Русский")
    pub native_name: &'static str,

    /// Lowercase token meaning "play again"
    pub yes_token: &'static str,

    /// Lowercase token meaning "stop"
    pub no_token: &'static str,

    /// Message templates
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance, initializing it on first call.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "ru", "en"). Matched
    ///   exactly, so callers lowercase user input first.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get every accepted play-again token across all languages.
    ///
    /// # Returns
    /// Each language's yes token followed by its no token, in registration
    /// order (e.g., `["да", "нет", "yes", "no"]`).
    pub fn restart_tokens(&self) -> Vec<&'static str> {
        self.languages
            .iter()
            .flat_map(|lang| [lang.yes_token, lang.no_token])
            .collect()
    }

    /// Check whether a token means "play again" in any language.
    ///
    /// # Arguments
    /// * `token` - A lowercased response to the play-again prompt
    ///
    /// # Returns
    /// `true` if some language uses `token` as its yes token, `false` otherwise.
    pub fn is_yes_token(&self, token: &str) -> bool {
        self.languages.iter().any(|lang| lang.yes_token == token)
    }

    /// Check whether a token means "stop" in any language.
    ///
    /// # Arguments
    /// * `token` - A lowercased response to the play-again prompt
    ///
    /// # Returns
    /// `true` if some language uses `token` as its no token, `false` otherwise.
    pub fn is_no_token(&self, token: &str) -> bool {
        self.languages.iter().any(|lang| lang.no_token == token)
    }
}

/// Registration order is also the order of `restart_tokens`.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            yes_token: "да",
            no_token: "нет",
            strings: &RUSSIAN_STRINGS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            yes_token: "yes",
            no_token: "no",
            strings: &ENGLISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_russian() {
        let config = LanguageRegistry::get()
            .get_by_code("ru")
            .expect("ru should be registered");

        assert_eq!(config.name, "Russian");
        assert_eq!(config.native_name, "Русский");
        assert_eq!(config.yes_token, "да");
        assert_eq!(config.no_token, "нет");
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("en should be registered");

        assert_eq!(config.name, "English");
        assert_eq!(config.yes_token, "yes");
        assert_eq!(config.no_token, "no");
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_restart_tokens() {
        let tokens = LanguageRegistry::get().restart_tokens();
        assert_eq!(tokens, vec!["да", "нет", "yes", "no"]);
    }

    #[test]
    fn test_yes_and_no_tokens_are_disjoint() {
        let registry = LanguageRegistry::get();
        for token in registry.restart_tokens() {
            assert_ne!(registry.is_yes_token(token), registry.is_no_token(token));
        }
    }
}
