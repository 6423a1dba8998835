//! Dictionary coverage checks.
//!
//! This module compares a dictionary against the default dictionary before
//! it is registered, to report which phrases gap-filling will supply and
//! which entries do not line up with the default key set.

use crate::i18n::Dictionary;
use serde::Serialize;

/// Coverage report of one dictionary relative to the default dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Language code of the checked dictionary
    pub language_code: String,

    /// Default keys absent from the dictionary (gap-filling will supply these)
    pub missing: Vec<String>,

    /// Keys that the default dictionary does not know about
    pub extra: Vec<String>,

    /// Keys where one side is a plural pair and the other a single phrase
    pub shape_mismatches: Vec<String>,
}

impl CoverageReport {
    /// Create an empty report for a language code
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            missing: Vec::new(),
            extra: Vec::new(),
            shape_mismatches: Vec::new(),
        }
    }

    /// Check if every default key is translated
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Check if the report found nothing at all
    pub fn is_clean(&self) -> bool {
        self.is_complete() && self.extra.is_empty() && self.shape_mismatches.is_empty()
    }

    /// Share of the default keys the dictionary translates itself, as a percentage (0-100).
    ///
    /// An empty default dictionary counts as fully covered.
    pub fn coverage_percent(&self, default_len: usize) -> f64 {
        if default_len == 0 {
            return 100.0;
        }
        let translated = default_len.saturating_sub(self.missing.len());
        (translated as f64 / default_len as f64) * 100.0
    }
}

/// Checker for dictionary coverage.
pub struct DictionaryCoverage;

impl DictionaryCoverage {
    /// Compare `dictionary` with `default`.
    ///
    /// # Arguments
    /// * `dictionary` - The dictionary about to be registered
    /// * `default` - The default dictionary it will be gap-filled against
    ///
    /// # Returns
    /// A `CoverageReport` listing missing, extra and mismatched keys, each in key order.
    pub fn check(dictionary: &Dictionary, default: &Dictionary) -> CoverageReport {
        let mut report = CoverageReport::new(dictionary.language_code());

        for (key, default_value) in default.iter() {
            match dictionary.get(key) {
                None => report.missing.push(key.to_string()),
                Some(value) if value.is_plural() != default_value.is_plural() => {
                    report.shape_mismatches.push(key.to_string())
                }
                Some(_) => {}
            }
        }

        report.extra = dictionary
            .keys()
            .filter(|key| !default.contains_key(key))
            .map(str::to_string)
            .collect();

        report
    }
}
