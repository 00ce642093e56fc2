use std::time::Duration;

use anyhow::{Context, Result};

use crate::enhancement::coordinator::DEFAULT_MAX_TEXT_LENGTH;
use crate::enhancement::tone::Tone;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_LOG_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=info,tower_http=info");

/// Application configuration loaded from environment variables.
/// Nothing is required: without `OPENAI_API_KEY` the service runs on the
/// fallback engine alone.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// `tracing` filter directives. `RUST_LOG` verbatim when set.
    pub log_filter: String,
    pub openai_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub max_text_length: usize,
    /// Tones callers may select. Always contains `Professional`.
    pub enabled_tones: Vec<Tone>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            openai_api_key: get("OPENAI_API_KEY"),
            llm_base_url: get("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_timeout: Duration::from_secs(
                get("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_text_length: match get("MAX_TEXT_LENGTH") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_TEXT_LENGTH must be a positive integer")?,
                None => DEFAULT_MAX_TEXT_LENGTH,
            },
            enabled_tones: parse_enabled_tones(get("ENABLED_TONES").as_deref()),
        })
    }

    pub fn remote_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// Comma-separated tone ids. Unknown ids are ignored and `professional` is
/// always enabled, since every unrecognized tone resolves to it.
fn parse_enabled_tones(raw: Option<&str>) -> Vec<Tone> {
    let Some(raw) = raw else {
        return Tone::ALL.to_vec();
    };

    let listed: Vec<Tone> = raw.split(',').filter_map(Tone::from_id).collect();

    Tone::ALL
        .into_iter()
        .filter(|t| *t == Tone::Professional || listed.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_filter, "resume_enhancer=info,tower_http=info");
        assert!(!config.remote_enabled());
        assert_eq!(config.llm_model, DEFAULT_MODEL);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.max_text_length, 5000);
        assert_eq!(config.enabled_tones, Tone::ALL.to_vec());
    }

    #[test]
    fn test_rust_log_is_used_verbatim() {
        let config = config_from(&[("RUST_LOG", "resume_enhancer=debug,reqwest=warn")]).unwrap();
        assert_eq!(config.log_filter, "resume_enhancer=debug,reqwest=warn");
    }

    #[test]
    fn test_api_key_enables_remote() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(config.remote_enabled());
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]).unwrap();
        assert!(!config.remote_enabled());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("MAX_TEXT_LENGTH", "-1")]).is_err());
    }

    #[test]
    fn test_enabled_tones_always_include_professional() {
        let config = config_from(&[("ENABLED_TONES", "casual, ats-friendly, bogus")]).unwrap();
        assert_eq!(
            config.enabled_tones,
            vec![Tone::Professional, Tone::Casual, Tone::Ats]
        );
    }
}
