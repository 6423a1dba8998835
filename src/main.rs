//! Registry report binary - registers the built-in dictionaries and reports their coverage
//!
//! Usage:
//!   cargo run                                        # Text report for all built-ins
//!   DICTIONARY_REPORT_FORMAT=json cargo run          # JSON report on stdout
//!
//! Optional environment variables:
//! - DICTIONARY_LANGUAGES (comma-separated built-in codes, defaults to all)
//! - DICTIONARY_REPORT_FORMAT (text or json, defaults to text)

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use ui_dictionaries::config::{Config, ReportFormat};
use ui_dictionaries::i18n::{languages, CoverageReport, DictionaryManager, MetricsReport};

#[derive(Debug, Serialize)]
struct RegistryReport {
    default_language: String,
    languages: Vec<LanguageReport>,
    metrics: MetricsReport,
}

#[derive(Debug, Serialize)]
struct LanguageReport {
    phrases: usize,
    coverage_percent: f64,
    coverage: CoverageReport,
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ui_dictionaries=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let mut manager = DictionaryManager::new();
    let default_len = manager.get_default_language().len();

    let mut reports = Vec::new();
    for code in &config.languages {
        let dictionary = languages::builtin(code)?;
        let coverage = manager.coverage(&dictionary);

        if code != manager.default_language_code() {
            manager
                .register_dictionary(dictionary)
                .with_context(|| format!("Failed to register {}", code))?;
        }

        let phrases = manager
            .get_language(code)
            .map(|dict| dict.len())
            .unwrap_or_default();

        reports.push(LanguageReport {
            phrases,
            coverage_percent: coverage.coverage_percent(default_len),
            coverage,
        });
    }

    let report = RegistryReport {
        default_language: manager.default_language_code().to_string(),
        languages: reports,
        metrics: manager.metrics().report(),
    };

    match config.report_format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Text => print_text_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &RegistryReport) {
    info!("Default language: {}", report.default_language);

    for language in &report.languages {
        let coverage = &language.coverage;
        info!(
            "{}: {} phrases, {:.1}% translated",
            coverage.language_code, language.phrases, language.coverage_percent
        );
        if !coverage.missing.is_empty() {
            warn!(
                "{}: {} phrases filled from default: {:?}",
                coverage.language_code,
                coverage.missing.len(),
                coverage.missing
            );
        }
        if !coverage.shape_mismatches.is_empty() {
            warn!(
                "{}: plural shape differs from default for {:?}",
                coverage.language_code, coverage.shape_mismatches
            );
        }
    }

    info!(
        "{} registrations, {} phrases filled",
        report.metrics.registrations, report.metrics.filled_phrases
    );
}
