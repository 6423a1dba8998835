//! Internationalization (i18n) module: registry of UI phrase dictionaries.
//!
//! This module holds every language dictionary the UI can use and guarantees
//! that a registered dictionary never lacks a phrase of the default dictionary:
//! missing phrases are filled from the default at registration time.
//!
//! # Architecture
//!
//! - `static_register`: Namespaced, insertion-ordered store of named values
//! - `dictionary`: `Dictionary`/`PhraseValue` types and the gap-filling algorithm
//! - `manager`: `DictionaryManager`, registration and lookup with a fixed default
//! - `languages`: Built-in phrase tables (`en-US` default, `pl-PL`)
//! - `coverage`: Pre-registration comparison against the default dictionary
//! - `metrics`: Registration and lookup counters
//!
//! # Example
//!
//! ```rust
//! use ui_dictionaries::i18n::{Dictionary, DictionaryManager};
//!
//! let mut manager = DictionaryManager::new();
//! let polish = Dictionary::new("pl-PL").with_phrase("ContextMenu:items.undo", "Cofnij");
//!
//! let registered = manager.register_dictionary(polish).unwrap();
//! assert_eq!(registered.phrase("ContextMenu:items.undo", None), Some("Cofnij"));
//! assert_eq!(registered.phrase("ContextMenu:items.redo", None), Some("Redo"));
//! ```

mod coverage;
mod dictionary;
mod error;
pub mod languages;
mod manager;
mod metrics;
mod static_register;

pub use coverage::{CoverageReport, DictionaryCoverage};
pub use dictionary::{extend_not_existing_keys, Dictionary, PhraseValue, LANGUAGE_CODE_KEY};
pub use error::DictionaryError;
pub use languages::DEFAULT_LANGUAGE_CODE;
pub use manager::{normalize_language_code, DictionaryManager};
pub use metrics::{MetricsReport, RegistryMetrics};
pub use static_register::NamedRegistry;
