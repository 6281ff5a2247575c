use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default outbound request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub common: core_config::Config,
    pub openai: OpenAiSettings,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: Secret<String>,
    /// Model identifier sent with every completion (e.g., gpt-4.1-mini)
    pub model: String,
    /// API root without the trailing `/chat/completions`
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl SummaryConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SummaryConfig {
            common: common_config,
            openai: OpenAiSettings {
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                model: get_env("OPENAI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_BASE_URL), is_prod)?,
                timeout_secs: parse_timeout(&get_env(
                    "OPENAI_TIMEOUT_SECS",
                    Some(&DEFAULT_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?)?,
            },
            observability: ObservabilityConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::ConfigError(anyhow::anyhow!(
            "OPENAI_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))),
        Ok(secs) => Ok(secs),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout("30").unwrap(), 30);
        assert_eq!(parse_timeout(" 5 ").unwrap(), 5);
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn missing_required_key_without_default_fails() {
        let err = get_env("SUMMARY_SERVICE_TEST_UNSET_KEY", None, false).unwrap_err();
        assert!(err.to_string().contains("SUMMARY_SERVICE_TEST_UNSET_KEY"));
    }

    #[test]
    fn default_applies_outside_prod_only() {
        assert_eq!(
            get_env("SUMMARY_SERVICE_TEST_UNSET_KEY", Some("fallback"), false).unwrap(),
            "fallback"
        );
        assert!(get_env("SUMMARY_SERVICE_TEST_UNSET_KEY", Some("fallback"), true).is_err());
    }
}
