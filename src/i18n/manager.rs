//! Dictionary manager: registration, gap-filling and lookup of language dictionaries.
//!
//! The manager is bootstrapped with a default dictionary, which is registered
//! through the same path as every other dictionary. Each later registration
//! is completed with the phrases of the default dictionary it lacks before it
//! is stored, so a registered dictionary always covers the default key set.
//!
//! Registration takes `&mut self`. For code that needs a process-wide
//! instance, [`DictionaryManager::global`] wraps one manager in a single
//! `RwLock`: registering holds the write lock, so a reader never observes a
//! partially gap-filled dictionary.

use crate::i18n::coverage::{CoverageReport, DictionaryCoverage};
use crate::i18n::dictionary::extend_not_existing_keys;
use crate::i18n::languages;
use crate::i18n::metrics::RegistryMetrics;
use crate::i18n::static_register::NamedRegistry;
use crate::i18n::{Dictionary, DictionaryError};
use regex::Regex;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::{debug, info, warn};

/// Namespace of the dictionary store.
const NAMESPACE: &str = "languagesDictionaries";

/// Process-wide manager (initialized lazily)
static GLOBAL: OnceLock<RwLock<DictionaryManager>> = OnceLock::new();

static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Registry of language dictionaries with a fixed default dictionary.
#[derive(Debug)]
pub struct DictionaryManager {
    /// Code of the default dictionary, fixed at construction
    default_code: String,

    /// The bootstrap default dictionary, as registered
    default: Arc<Dictionary>,

    registry: NamedRegistry<Arc<Dictionary>>,
    metrics: RegistryMetrics,
}

impl Default for DictionaryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryManager {
    /// Create a manager bootstrapped with the built-in `en-US` dictionary.
    pub fn new() -> Self {
        Self::bootstrap(languages::default_dictionary())
    }

    /// Create a manager bootstrapped with a custom default dictionary.
    ///
    /// The dictionary's own language code becomes the default code for the
    /// lifetime of the manager.
    ///
    /// # Returns
    /// * `Ok(DictionaryManager)` with the default registered
    /// * `Err(DictionaryError::MissingLanguageCode)` if the dictionary has no code
    pub fn with_default(default: Dictionary) -> Result<Self, DictionaryError> {
        if default.language_code().is_empty() {
            return Err(DictionaryError::MissingLanguageCode);
        }
        Ok(Self::bootstrap(default))
    }

    /// Get the process-wide manager.
    ///
    /// The manager is bootstrapped with the built-in default dictionary on
    /// first access. Registration must go through the write lock.
    pub fn global() -> &'static RwLock<DictionaryManager> {
        GLOBAL.get_or_init(|| RwLock::new(DictionaryManager::new()))
    }

    fn bootstrap(default: Dictionary) -> Self {
        let default_code = default.language_code().to_string();
        let mut manager = Self {
            default_code: default_code.clone(),
            // Replaced by the registered instance below
            default: Arc::new(Dictionary::new(default_code.as_str())),
            registry: NamedRegistry::new(NAMESPACE),
            metrics: RegistryMetrics::new(),
        };

        manager.default = manager.register_unchecked(default_code, default);
        info!(
            "Registered default dictionary {} with {} phrases",
            manager.default_code,
            manager.default.len()
        );
        manager
    }

    /// Register a dictionary under an explicit language code.
    ///
    /// Unless `code` is the default code, the dictionary is first completed
    /// with every phrase of the current default dictionary it lacks; phrases
    /// it already has are kept as they are. It is then stored under `code`,
    /// replacing any previous dictionary for that code.
    ///
    /// # Arguments
    /// * `code` - Registry key (e.g. "pl-PL")
    /// * `dictionary` - The dictionary to complete and store; an empty
    ///   language code is set to `code`
    ///
    /// # Returns
    /// * `Ok(Arc<Dictionary>)` - the stored, completed dictionary
    /// * `Err(DictionaryError::MissingLanguageCode)` if `code` is empty
    pub fn register_language(
        &mut self,
        code: impl Into<String>,
        mut dictionary: Dictionary,
    ) -> Result<Arc<Dictionary>, DictionaryError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DictionaryError::MissingLanguageCode);
        }
        if dictionary.language_code().is_empty() {
            dictionary.set_language_code(code.as_str());
        }
        Ok(self.register_unchecked(code, dictionary))
    }

    /// Register a dictionary under its own language code.
    pub fn register_dictionary(
        &mut self,
        dictionary: Dictionary,
    ) -> Result<Arc<Dictionary>, DictionaryError> {
        let code = dictionary.language_code().to_string();
        self.register_language(code, dictionary)
    }

    /// Register every built-in dictionary other than the default.
    ///
    /// # Returns
    /// The registered dictionaries, in built-in order.
    pub fn register_builtin_languages(&mut self) -> Result<Vec<Arc<Dictionary>>, DictionaryError> {
        let mut registered = Vec::new();
        for dictionary in languages::builtin_dictionaries() {
            if dictionary.language_code() == self.default_code {
                continue;
            }
            registered.push(self.register_dictionary(dictionary)?);
        }
        Ok(registered)
    }

    fn register_unchecked(&mut self, code: String, mut dictionary: Dictionary) -> Arc<Dictionary> {
        let filled = self.extend_by_default(&code, &mut dictionary);
        let dictionary = Arc::new(dictionary);

        let overwrote = self.registry.register(code.as_str(), Arc::clone(&dictionary));
        self.metrics.record_registration(filled.len(), overwrote);

        if overwrote {
            debug!("Replaced dictionary for {}", code);
        }
        debug!(
            "Registered dictionary {} ({} phrases, {} filled from {})",
            code,
            dictionary.len(),
            filled.len(),
            self.default_code
        );

        dictionary
    }

    fn extend_by_default(&self, code: &str, dictionary: &mut Dictionary) -> Vec<String> {
        if code == self.default_code {
            return Vec::new();
        }

        // The stored default wins over the bootstrap one if it was re-registered
        let source = self
            .registry
            .get(&self.default_code)
            .unwrap_or(&self.default);
        extend_not_existing_keys(dictionary, source)
    }

    /// Get the dictionary registered for a language code.
    ///
    /// # Returns
    /// * `Some(Arc<Dictionary>)` - the most recently registered dictionary
    /// * `None` if nothing was registered for `code`
    pub fn get_language(&self, code: &str) -> Option<Arc<Dictionary>> {
        if !self.has_language(code) {
            self.metrics.record_lookup_miss();
            return None;
        }

        self.metrics.record_lookup_hit();
        self.registry.get(code).cloned()
    }

    /// Check if a dictionary was registered for a language code.
    pub fn has_language(&self, code: &str) -> bool {
        self.registry.has(code)
    }

    /// Get the default dictionary.
    ///
    /// Returns the bootstrap default directly, independent of later
    /// registrations under the default code.
    pub fn get_default_language(&self) -> Arc<Dictionary> {
        Arc::clone(&self.default)
    }

    /// The default language code.
    pub fn default_language_code(&self) -> &str {
        &self.default_code
    }

    /// All registered dictionaries, in first-registration order.
    pub fn get_languages(&self) -> Vec<Arc<Dictionary>> {
        self.registry.values().cloned().collect()
    }

    /// Return `code` (normalized) if it is registered, otherwise the default code.
    pub fn valid_language_code(&self, code: &str) -> String {
        let normalized = normalize_language_code(code);

        if self.has_language(&normalized) {
            return normalized;
        }

        warn!(
            "Language '{}' is not registered, using {} instead",
            code, self.default_code
        );
        self.default_code.clone()
    }

    /// Look up a phrase for a language.
    ///
    /// # Arguments
    /// * `code` - Registered language code
    /// * `key` - Phrase key
    /// * `plural_form` - Index into a singular/plural pair (0 or 1); `None` picks the singular
    ///
    /// # Returns
    /// `None` if the language is not registered or has no such phrase.
    pub fn translated_phrase(
        &self,
        code: &str,
        key: &str,
        plural_form: Option<usize>,
    ) -> Option<String> {
        let dictionary = self.get_language(code)?;
        dictionary.phrase(key, plural_form).map(str::to_string)
    }

    /// Compare a not-yet-registered dictionary with the current default dictionary.
    pub fn coverage(&self, dictionary: &Dictionary) -> CoverageReport {
        let default = self
            .registry
            .get(&self.default_code)
            .unwrap_or(&self.default);
        DictionaryCoverage::check(dictionary, default)
    }

    /// Registry counters.
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

/// Normalize a `language-REGION` code.
///
/// Two letters, a dash and two letters (in any case) become lowercase
/// language and uppercase region, e.g. `"PL-pl"` becomes `"pl-PL"`.
/// Other shapes are returned unchanged.
pub fn normalize_language_code(code: &str) -> String {
    let regex = LANGUAGE_CODE_REGEX
        .get_or_init(|| Regex::new(r"^([a-zA-Z]{2})-([a-zA-Z]{2})$").unwrap());

    match regex.captures(code) {
        Some(caps) => format!(
            "{}-{}",
            caps[1].to_ascii_lowercase(),
            caps[2].to_ascii_uppercase()
        ),
        None => code.to_string(),
    }
}
