//! Dictionary type: a language code plus an open-ended set of phrases.
//!
//! A dictionary serializes to the flat object shape used by phrase tables:
//! the reserved `languageCode` key sits next to the phrase keys.
//!
//! ```json
//! {
//!   "languageCode": "pl-PL",
//!   "ContextMenu:items.undo": "Cofnij",
//!   "ContextMenu:items.removeRow": ["Usuń wiersz", "Usuń wiersze"]
//! }
//! ```

use crate::i18n::DictionaryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved key holding the language code in a serialized dictionary.
pub const LANGUAGE_CODE_KEY: &str = "languageCode";

/// A translated phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhraseValue {
    /// Phrase with no number-dependent variant.
    Text(String),

    /// Ordered `[singular, plural]` pair.
    Plural([String; 2]),
}

impl PhraseValue {
    /// Build a singular/plural pair.
    pub fn plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        PhraseValue::Plural([singular.into(), plural.into()])
    }

    /// Pick the phrase to display.
    ///
    /// For a plural pair, `plural_form` indexes the pair (0 = singular,
    /// 1 = plural). A missing or out-of-range index yields the singular form.
    /// Plain text ignores the index.
    pub fn select(&self, plural_form: Option<usize>) -> &str {
        match self {
            PhraseValue::Text(text) => text.as_str(),
            PhraseValue::Plural(forms) => plural_form
                .and_then(|index| forms.get(index))
                .unwrap_or(&forms[0])
                .as_str(),
        }
    }

    /// Whether this is a singular/plural pair.
    pub fn is_plural(&self) -> bool {
        matches!(self, PhraseValue::Plural(_))
    }
}

impl From<&str> for PhraseValue {
    fn from(text: &str) -> Self {
        PhraseValue::Text(text.to_string())
    }
}

impl From<String> for PhraseValue {
    fn from(text: String) -> Self {
        PhraseValue::Text(text)
    }
}

/// Phrases for a single language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Language code (e.g. "en-US", "pl-PL"); empty when the source omitted it.
    #[serde(rename = "languageCode", default)]
    language_code: String,

    #[serde(flatten)]
    phrases: BTreeMap<String, PhraseValue>,
}

impl Dictionary {
    /// Create an empty dictionary for a language code.
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            phrases: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_phrase(mut self, key: impl Into<String>, value: impl Into<PhraseValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Parse a dictionary from its JSON object form.
    ///
    /// A document without `languageCode` parses into a dictionary with an
    /// empty code; registering it fails with
    /// [`DictionaryError::MissingLanguageCode`].
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the JSON object form.
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The language code carried by this dictionary.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Insert or replace a phrase.
    ///
    /// The reserved [`LANGUAGE_CODE_KEY`] never becomes a phrase: it sets the
    /// language code instead (the singular form if given a pair).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PhraseValue>) {
        let key = key.into();
        let value = value.into();

        if key == LANGUAGE_CODE_KEY {
            self.language_code = value.select(None).to_string();
            return;
        }
        self.phrases.insert(key, value);
    }

    pub(crate) fn set_language_code(&mut self, language_code: impl Into<String>) {
        self.language_code = language_code.into();
    }

    /// Look up a phrase by key.
    pub fn get(&self, key: &str) -> Option<&PhraseValue> {
        self.phrases.get(key)
    }

    /// Whether the key is present (regardless of its value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.phrases.contains_key(key)
    }

    /// Look up a phrase and pick its singular or plural form.
    pub fn phrase(&self, key: &str, plural_form: Option<usize>) -> Option<&str> {
        self.get(key).map(|value| value.select(plural_form))
    }

    /// Phrase keys in sorted order. The reserved language code key is not included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.phrases.keys().map(String::as_str)
    }

    /// Key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhraseValue)> {
        self.phrases.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the dictionary has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Fill the gaps of `target` with the entries of `source`.
///
/// Every key present in `source` but absent from `target` is copied over.
/// Keys already present in `target` are left untouched, even if their value
/// is empty. The language code is not a phrase and is never copied. Values are cloned, so the two dictionaries never share a plural
/// pair.
///
/// # Returns
/// The keys that were filled, in key order.
pub fn extend_not_existing_keys(target: &mut Dictionary, source: &Dictionary) -> Vec<String> {
    let mut filled = Vec::new();

    for (key, value) in &source.phrases {
        if !target.phrases.contains_key(key) {
            target.phrases.insert(key.clone(), value.clone());
            filled.push(key.clone());
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Dictionary {
        Dictionary::new("en-US")
            .with_phrase("GREETING", "Hello")
            .with_phrase("ROWS", PhraseValue::plural("Row", "Rows"))
    }

    // ==================== PhraseValue Tests ====================

    #[test]
    fn test_select_text_ignores_plural_form() {
        let value = PhraseValue::from("Undo");
        assert_eq!(value.select(None), "Undo");
        assert_eq!(value.select(Some(1)), "Undo");
    }

    #[test]
    fn test_select_plural_forms() {
        let value = PhraseValue::plural("Usuń wiersz", "Usuń wiersze");
        assert_eq!(value.select(Some(0)), "Usuń wiersz");
        assert_eq!(value.select(Some(1)), "Usuń wiersze");
    }

    #[test]
    fn test_select_plural_defaults_to_singular() {
        let value = PhraseValue::plural("Row", "Rows");
        assert_eq!(value.select(None), "Row");
        assert_eq!(value.select(Some(7)), "Row");
    }

    #[test]
    fn test_is_plural() {
        assert!(PhraseValue::plural("a", "b").is_plural());
        assert!(!PhraseValue::from("a").is_plural());
    }

    // ==================== Dictionary Tests ====================

    #[test]
    fn test_dictionary_basic_accessors() {
        let dict = english();
        assert_eq!(dict.language_code(), "en-US");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains_key("GREETING"));
        assert!(!dict.contains_key("languageCode"));
        assert_eq!(dict.phrase("ROWS", Some(1)), Some("Rows"));
        assert_eq!(dict.phrase("MISSING", None), None);
    }

    #[test]
    fn test_keys_are_sorted() {
        let dict = Dictionary::new("xx-XX")
            .with_phrase("b", "2")
            .with_phrase("a", "1");
        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_from_json_flat_shape() {
        let json = r#"{
            "languageCode": "pl-PL",
            "FAREWELL": "Do widzenia",
            "REMOVE_ROW": ["Usuń wiersz", "Usuń wiersze"]
        }"#;

        let dict = Dictionary::from_json(json).expect("Should parse");
        assert_eq!(dict.language_code(), "pl-PL");
        assert_eq!(dict.len(), 2);
        assert_eq!(
            dict.get("REMOVE_ROW"),
            Some(&PhraseValue::plural("Usuń wiersz", "Usuń wiersze"))
        );
    }

    #[test]
    fn test_from_json_without_language_code() {
        let dict = Dictionary::from_json(r#"{"GREETING": "Hi"}"#).expect("Should parse");
        assert_eq!(dict.language_code(), "");
        assert!(dict.contains_key("GREETING"));
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let result = Dictionary::from_json(r#"{"languageCode": "x", "NESTED": {"a": "b"}}"#);
        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn test_to_json_contains_language_code_key() {
        let json = english().to_json().expect("Should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Valid JSON");

        assert_eq!(value[LANGUAGE_CODE_KEY], "en-US");
        assert_eq!(value["GREETING"], "Hello");
        assert_eq!(value["ROWS"][1], "Rows");
    }

    #[test]
    fn test_language_code_key_sets_code() {
        let dict = Dictionary::new("pl-PL").with_phrase(LANGUAGE_CODE_KEY, "de-DE");

        assert_eq!(dict.language_code(), "de-DE");
        assert!(!dict.contains_key(LANGUAGE_CODE_KEY));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_json_round_trip_with_language_code_key() {
        let dict = Dictionary::new("pl-PL")
            .with_phrase(LANGUAGE_CODE_KEY, "pl-PL")
            .with_phrase("FAREWELL", "Do widzenia");

        let json = dict.to_json().expect("Should serialize");
        assert_eq!(json.matches(LANGUAGE_CODE_KEY).count(), 1);

        let parsed = Dictionary::from_json(&json).expect("Should parse");
        assert_eq!(parsed, dict);
    }

    // ==================== Gap-Filling Tests ====================

    #[test]
    fn test_extend_never_copies_language_code() {
        let source = english().with_phrase(LANGUAGE_CODE_KEY, "en-GB");
        let mut target = Dictionary::new("pl-PL");

        let filled = extend_not_existing_keys(&mut target, &source);

        assert!(!filled.iter().any(|key| key == LANGUAGE_CODE_KEY));
        assert!(!target.contains_key(LANGUAGE_CODE_KEY));
        assert_eq!(target.language_code(), "pl-PL");
    }

    #[test]
    fn test_extend_fills_missing_keys() {
        let mut polish = Dictionary::new("pl-PL").with_phrase("FAREWELL", "Do widzenia");
        let filled = extend_not_existing_keys(&mut polish, &english());

        assert_eq!(filled, vec!["GREETING", "ROWS"]);
        assert_eq!(polish.phrase("GREETING", None), Some("Hello"));
        assert_eq!(polish.phrase("FAREWELL", None), Some("Do widzenia"));
        assert_eq!(polish.language_code(), "pl-PL");
    }

    #[test]
    fn test_extend_keeps_existing_values() {
        let mut german = Dictionary::new("de-DE").with_phrase("GREETING", "Hallo");
        extend_not_existing_keys(&mut german, &english());

        assert_eq!(german.phrase("GREETING", None), Some("Hallo"));
    }

    #[test]
    fn test_extend_presence_not_truthiness() {
        let mut target = Dictionary::new("xx-XX")
            .with_phrase("GREETING", "")
            .with_phrase("ROWS", PhraseValue::plural("", ""));
        let filled = extend_not_existing_keys(&mut target, &english());

        assert!(filled.is_empty());
        assert_eq!(target.phrase("GREETING", None), Some(""));
        assert_eq!(target.get("ROWS"), Some(&PhraseValue::plural("", "")));
    }

    #[test]
    fn test_extend_keeps_own_plural_pair() {
        let mut polish = Dictionary::new("pl-PL")
            .with_phrase("REMOVE_ROW", PhraseValue::plural("Usuń wiersz", "Usuń wiersze"));
        extend_not_existing_keys(&mut polish, &english());

        assert_eq!(
            polish.get("REMOVE_ROW"),
            Some(&PhraseValue::plural("Usuń wiersz", "Usuń wiersze"))
        );
    }

    #[test]
    fn test_extend_twice_is_idempotent() {
        let mut target = Dictionary::new("pl-PL").with_phrase("FAREWELL", "Do widzenia");
        extend_not_existing_keys(&mut target, &english());
        let snapshot = target.clone();

        let filled = extend_not_existing_keys(&mut target, &english());
        assert!(filled.is_empty());
        assert_eq!(target, snapshot);
    }
}
