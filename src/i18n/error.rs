use thiserror::Error;

/// Errors raised by dictionary parsing and registration.
///
/// Looking up an unregistered language is not an error; lookups return
/// `Option` instead.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary was registered without a language code.
    #[error("dictionary has no language code")]
    MissingLanguageCode,

    /// A dictionary document could not be parsed.
    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    /// A built-in language was requested that does not exist.
    #[error("unknown built-in language: '{0}'")]
    UnknownBuiltin(String),
}
