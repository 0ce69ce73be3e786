//! Runtime configuration.
//!
//! Everything is read from environment variables, optionally seeded from a
//! `.env` file. Only the Gemini credential is mandatory.

use crate::{
    catalog::{DEFAULT_LABEL_LANGUAGES, DEFAULT_PAGE_SIZE},
    CuratorError, CuratorResult,
};
use arte_connectors::sparql::WIKIDATA_SPARQL_ENDPOINT;
use std::{env, fmt, ops::RangeInclusive, time::Duration};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const PAGE_SIZE_RANGE: RangeInclusive<usize> = 1..=100;

#[derive(Clone, PartialEq, Eq)]
pub struct CuratorConfig {
    /// Credential for the Gemini API (`GEMINI_API_KEY`).
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Overrides the Gemini base URL, mostly for tests and proxies.
    pub gemini_base_url: Option<String>,
    pub wikidata_endpoint: String,
    pub page_size: usize,
    /// Label language preference passed to the label service.
    pub label_languages: String,
    pub user_agent: Option<String>,
    /// Applied to both clients when set; transport defaults otherwise.
    pub request_timeout: Option<Duration>,
    /// `tracing_subscriber::EnvFilter` directive (trace, debug, info, ...).
    pub log_filter: String,
}

impl CuratorConfig {
    /// Load from the process environment after reading `.env` if present.
    pub fn from_env() -> CuratorResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> CuratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let gemini_api_key = var("GEMINI_API_KEY")
            .ok_or_else(|| CuratorError::Config("GEMINI_API_KEY is not set".to_string()))?;

        let page_size = match var("CATALOG_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| PAGE_SIZE_RANGE.contains(size))
                .ok_or_else(|| {
                    CuratorError::Config(format!(
                        "CATALOG_PAGE_SIZE must be an integer in {}..={}, got '{raw}'",
                        PAGE_SIZE_RANGE.start(),
                        PAGE_SIZE_RANGE.end()
                    ))
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let request_timeout = match var("CURATOR_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or_else(|| {
                        CuratorError::Config(format!(
                            "CURATOR_REQUEST_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                        ))
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL"),
            wikidata_endpoint: var("WIKIDATA_ENDPOINT")
                .unwrap_or_else(|| WIKIDATA_SPARQL_ENDPOINT.to_string()),
            page_size,
            label_languages: var("CATALOG_LANGUAGES")
                .unwrap_or_else(|| DEFAULT_LABEL_LANGUAGES.to_string()),
            user_agent: var("CURATOR_USER_AGENT"),
            request_timeout,
            log_filter: var("CURATOR_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl fmt::Debug for CuratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuratorConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("wikidata_endpoint", &self.wikidata_endpoint)
            .field("page_size", &self.page_size)
            .field("label_languages", &self.label_languages)
            .field("user_agent", &self.user_agent)
            .field("request_timeout", &self.request_timeout)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CuratorConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();

        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, "gemini-3-flash-preview");
        assert_eq!(config.gemini_base_url, None);
        assert_eq!(config.wikidata_endpoint, "https://query.wikidata.org/sparql");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.label_languages, "[AUTO_LANGUAGE],pt,en");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_missing_api_key() {
        let err = CuratorConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, CuratorError::Config(msg) if msg.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn test_overrides() {
        let config = CuratorConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("CATALOG_PAGE_SIZE", "50"),
            ("CATALOG_LANGUAGES", "en"),
            ("CURATOR_REQUEST_TIMEOUT_SECS", "30"),
            ("CURATOR_LOG", "arte_curator=debug"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.label_languages, "en");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.log_filter, "arte_curator=debug");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config =
            CuratorConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "SUPERSECRETKEY")])).unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("SUPERSECRETKEY"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("gemini-3-flash-preview"));
    }

    #[test]
    fn test_page_size_out_of_range() {
        for raw in ["0", "101", "twenty"] {
            let result = CuratorConfig::from_lookup(lookup(&[
                ("GEMINI_API_KEY", "secret"),
                ("CATALOG_PAGE_SIZE", raw),
            ]));
            assert!(matches!(result, Err(CuratorError::Config(_))), "{raw}");
        }
    }
}
