//! Built-in phrase tables.
//!
//! Each language lives in its own module as a static table of
//! `(key, phrase)` pairs; [`build`] turns a table into a [`Dictionary`].
//! English (`en-US`) is the default dictionary.

pub mod keys;

mod en_us;
mod pl_pl;

use crate::i18n::{Dictionary, DictionaryError, PhraseValue};

/// Language code of the default dictionary.
pub const DEFAULT_LANGUAGE_CODE: &str = en_us::LANGUAGE_CODE;

/// A phrase in a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPhrase {
    Text(&'static str),
    Plural(&'static str, &'static str),
}

impl From<StaticPhrase> for PhraseValue {
    fn from(phrase: StaticPhrase) -> Self {
        match phrase {
            StaticPhrase::Text(text) => PhraseValue::Text(text.to_string()),
            StaticPhrase::Plural(singular, plural) => PhraseValue::plural(singular, plural),
        }
    }
}

/// All built-in tables, default first.
const TABLES: &[(&str, &[(&str, StaticPhrase)])] = &[
    (en_us::LANGUAGE_CODE, en_us::PHRASES),
    (pl_pl::LANGUAGE_CODE, pl_pl::PHRASES),
];

/// Build a dictionary from a static table.
pub fn build(language_code: &str, phrases: &[(&str, StaticPhrase)]) -> Dictionary {
    phrases
        .iter()
        .fold(Dictionary::new(language_code), |dict, (key, phrase)| {
            dict.with_phrase(*key, *phrase)
        })
}

/// The default (`en-US`) dictionary.
pub fn default_dictionary() -> Dictionary {
    build(en_us::LANGUAGE_CODE, en_us::PHRASES)
}

/// Codes of all built-in languages, default first.
pub fn builtin_codes() -> Vec<&'static str> {
    TABLES.iter().map(|(code, _)| *code).collect()
}

/// Build one built-in dictionary by its exact code.
pub fn builtin(code: &str) -> Result<Dictionary, DictionaryError> {
    TABLES
        .iter()
        .find(|(table_code, _)| *table_code == code)
        .map(|(table_code, phrases)| build(table_code, phrases))
        .ok_or_else(|| DictionaryError::UnknownBuiltin(code.to_string()))
}

/// Build all built-in dictionaries, default first.
pub fn builtin_dictionaries() -> Vec<Dictionary> {
    TABLES
        .iter()
        .map(|(code, phrases)| build(code, phrases))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dictionary_code() {
        let dict = default_dictionary();
        assert_eq!(dict.language_code(), "en-US");
        assert_eq!(DEFAULT_LANGUAGE_CODE, "en-US");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for (code, phrases) in TABLES {
            let dict = build(code, phrases);
            assert_eq!(dict.len(), phrases.len(), "duplicate key in {}", code);
        }
    }

    #[test]
    fn test_builtin_codes_default_first() {
        let codes = builtin_codes();
        assert_eq!(codes[0], DEFAULT_LANGUAGE_CODE);
        assert!(codes.contains(&"pl-PL"));
    }

    #[test]
    fn test_builtin_polish_plural_entry() {
        let polish = builtin("pl-PL").expect("Polish is built in");
        assert_eq!(
            polish.get(keys::CONTEXTMENU_ITEMS_REMOVE_ROW),
            Some(&PhraseValue::plural("Usuń wiersz", "Usuń wiersze"))
        );
        assert_eq!(polish.phrase(keys::CONTEXTMENU_ITEMS_UNDO, None), Some("Cofnij"));
    }

    #[test]
    fn test_builtin_unknown_code() {
        let result = builtin("fr-FR");
        assert!(matches!(result, Err(DictionaryError::UnknownBuiltin(code)) if code == "fr-FR"));
    }

    #[test]
    fn test_builtin_dictionaries_matches_codes() {
        let codes: Vec<_> = builtin_dictionaries()
            .iter()
            .map(|dict| dict.language_code().to_string())
            .collect();
        assert_eq!(codes, builtin_codes());
    }
}
