use crate::i18n::{languages, normalize_language_code};
use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Output format of the registry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("Unknown report format: '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in languages to register, normalized (default: all built-ins)
    pub languages: Vec<String>,

    pub report_format: ReportFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("DICTIONARY_LANGUAGES").ok().as_deref(),
            std::env::var("DICTIONARY_REPORT_FORMAT").ok().as_deref(),
        )
    }

    /// Build a config from raw setting values (`None` = unset).
    pub fn from_values(languages: Option<&str>, report_format: Option<&str>) -> Result<Self> {
        let languages = match languages {
            Some(list) => parse_languages(list).context("Invalid DICTIONARY_LANGUAGES")?,
            None => languages::builtin_codes()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let report_format = report_format
            .map(ReportFormat::from_str)
            .transpose()
            .context("Invalid DICTIONARY_REPORT_FORMAT")?
            .unwrap_or(ReportFormat::Text);

        Ok(Self {
            languages,
            report_format,
        })
    }
}

/// Parse a comma-separated list of built-in language codes.
fn parse_languages(list: &str) -> Result<Vec<String>> {
    let mut codes = Vec::new();

    for code in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let code = normalize_language_code(code);
        languages::builtin(&code).with_context(|| format!("Cannot register '{}'", code))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    Ok(codes)
}
