//! Registry metrics.
//!
//! Counters for registrations, gap-filled phrases and lookups. Each
//! `DictionaryManager` owns its own counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Registry counters.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    /// Number of successful registrations (including overwrites)
    registrations: AtomicUsize,

    /// Number of registrations that replaced an existing language
    overwrites: AtomicUsize,

    /// Total number of phrases supplied by gap-filling
    filled_phrases: AtomicUsize,

    /// Number of lookups that found a registered language
    lookup_hits: AtomicUsize,

    /// Number of lookups for an unregistered language
    lookup_misses: AtomicUsize,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registration and how many phrases gap-filling supplied.
    pub fn record_registration(&self, filled: usize, overwrote: bool) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
        self.filled_phrases.fetch_add(filled, Ordering::Relaxed);
        if overwrote {
            self.overwrites.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a lookup for a registered language.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for an unregistered language.
    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::Relaxed)
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites.load(Ordering::Relaxed)
    }

    pub fn filled_phrases(&self) -> usize {
        self.filled_phrases.load(Ordering::Relaxed)
    }

    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total_lookups = hits + misses;
        let lookup_hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            registrations: self.registrations(),
            overwrites: self.overwrites(),
            filled_phrases: self.filled_phrases(),
            lookup_hits: hits,
            lookup_misses: misses,
            lookup_hit_rate,
        }
    }
}

/// Snapshot of the registry counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub registrations: usize,
    pub overwrites: usize,
    pub filled_phrases: usize,
    pub lookup_hits: usize,
    pub lookup_misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub lookup_hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_registration() {
        let metrics = RegistryMetrics::new();

        metrics.record_registration(3, false);
        metrics.record_registration(0, true);

        assert_eq!(metrics.registrations(), 2);
        assert_eq!(metrics.overwrites(), 1);
        assert_eq!(metrics.filled_phrases(), 3);
    }

    #[test]
    fn test_record_lookups() {
        let metrics = RegistryMetrics::new();

        metrics.record_lookup_hit();
        metrics.record_lookup_miss();
        metrics.record_lookup_miss();

        assert_eq!(metrics.lookup_hits(), 1);
        assert_eq!(metrics.lookup_misses(), 2);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = RegistryMetrics::new().report();

        assert_eq!(report.registrations, 0);
        assert_eq!(report.filled_phrases, 0);
        assert_eq!(report.lookup_hit_rate, 0.0);
    }

    #[test]
    fn test_report_lookup_hit_rate() {
        let metrics = RegistryMetrics::new();

        // 3 hits, 1 miss = 75% hit rate
        metrics.record_lookup_hit();
        metrics.record_lookup_hit();
        metrics.record_lookup_hit();
        metrics.record_lookup_miss();

        let report = metrics.report();
        assert_eq!(report.lookup_hits, 3);
        assert_eq!(report.lookup_misses, 1);
        assert_eq!(report.lookup_hit_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = RegistryMetrics::new();
        metrics.record_registration(2, false);

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"registrations\":1"));
        assert!(json.contains("\"filled_phrases\":2"));
    }
}
