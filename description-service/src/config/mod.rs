use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Value shipped in `.env.example`; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "your_openrouter_api_key_here";

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4";
pub const DEFAULT_APP_URL: &str = "http://localhost:8000";
pub const DEFAULT_APP_TITLE: &str = "Marketplace Demo";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct DescriptionConfig {
    pub common: core_config::Config,
    pub openrouter: OpenRouterConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
    /// Sent as `HTTP-Referer` so OpenRouter can attribute usage to the app.
    pub app_url: String,
    /// Sent as `X-Title`.
    pub app_title: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl OpenRouterConfig {
    /// The API key, unless it is missing, blank or still the placeholder.
    pub fn usable_api_key(&self) -> Option<&Secret<String>> {
        self.api_key.as_ref().filter(|key| {
            let key = key.expose_secret().trim();
            !key.is_empty() && key != PLACEHOLDER_API_KEY
        })
    }

    pub fn is_configured(&self) -> bool {
        self.usable_api_key().is_some()
    }
}

impl DescriptionConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the service config from `common` plus service variables resolved
    /// through `lookup`.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("OPENROUTER_TIMEOUT_SECS") {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(DescriptionConfig {
            common,
            openrouter: OpenRouterConfig {
                api_key: lookup("OPENROUTER_API_KEY").map(Secret::new),
                base_url: non_blank_or(lookup("OPENROUTER_BASE_URL"), DEFAULT_BASE_URL),
                model: DEFAULT_MODEL.to_string(),
                app_url: non_blank_or(lookup("NEXT_PUBLIC_APP_URL"), DEFAULT_APP_URL),
                app_title: DEFAULT_APP_TITLE.to_string(),
                timeout: Duration::from_secs(timeout_secs),
            },
            generation: GenerationConfig::default(),
        })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, AppError> {
    let secs = raw.trim().parse::<u64>().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "OPENROUTER_TIMEOUT_SECS must be a whole number of seconds: {}",
            e
        ))
    })?;
    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "OPENROUTER_TIMEOUT_SECS must be greater than zero"
        )));
    }
    Ok(secs)
}

fn non_blank_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: Option<&str>) -> OpenRouterConfig {
        OpenRouterConfig {
            api_key: key.map(|k| Secret::new(k.to_string())),
            ..OpenRouterConfig::default()
        }
    }

    #[test]
    fn missing_key_is_not_configured() {
        assert!(!with_key(None).is_configured());
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        assert!(!with_key(Some(PLACEHOLDER_API_KEY)).is_configured());
    }

    #[test]
    fn blank_key_is_not_configured() {
        assert!(!with_key(Some("   ")).is_configured());
    }

    #[test]
    fn real_key_is_configured() {
        let config = with_key(Some("sk-or-v1-abc"));
        assert!(config.is_configured());
        assert_eq!(
            config.usable_api_key().unwrap().expose_secret(),
            "sk-or-v1-abc"
        );
    }

    #[test]
    fn defaults_match_upstream_contract() {
        let config = OpenRouterConfig::default();
        assert_eq!(config.model, "anthropic/claude-sonnet-4");
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.app_url, "http://localhost:8000");
        assert_eq!(config.app_title, "Marketplace Demo");

        let generation = GenerationConfig::default();
        assert_eq!(generation.max_tokens, 500);
        assert!((generation.temperature - 0.7).abs() < f32::EPSILON);
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<DescriptionConfig, AppError> {
        let vars: std::collections::HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DescriptionConfig::from_lookup(core_config::Config::default(), |key| {
            vars.get(key).cloned()
        })
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load_with(&[]).unwrap();
        assert!(!config.openrouter.is_configured());
        assert_eq!(config.openrouter.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.openrouter.app_url, DEFAULT_APP_URL);
        assert_eq!(config.openrouter.timeout, Duration::from_secs(30));
    }

    #[test]
    fn service_variables_are_read() {
        let config = load_with(&[
            ("OPENROUTER_API_KEY", "sk-or-v1-live"),
            ("OPENROUTER_BASE_URL", "http://openrouter.internal/api/v1"),
            ("NEXT_PUBLIC_APP_URL", "https://shop.example.com"),
            ("OPENROUTER_TIMEOUT_SECS", " 12 "),
        ])
        .unwrap();

        assert_eq!(
            config.openrouter.usable_api_key().unwrap().expose_secret(),
            "sk-or-v1-live"
        );
        assert_eq!(config.openrouter.base_url, "http://openrouter.internal/api/v1");
        assert_eq!(config.openrouter.app_url, "https://shop.example.com");
        assert_eq!(config.openrouter.timeout, Duration::from_secs(12));
        assert_eq!(config.openrouter.model, DEFAULT_MODEL);
    }

    #[test]
    fn blank_app_url_falls_back_to_default() {
        let config = load_with(&[("NEXT_PUBLIC_APP_URL", "  ")]).unwrap();
        assert_eq!(config.openrouter.app_url, "http://localhost:8000");
    }

    #[test]
    fn placeholder_key_from_environment_is_not_usable() {
        let config = load_with(&[("OPENROUTER_API_KEY", PLACEHOLDER_API_KEY)]).unwrap();
        assert!(config.openrouter.api_key.is_some());
        assert!(config.openrouter.usable_api_key().is_none());
    }

    #[test]
    fn non_numeric_timeout_is_a_config_error() {
        let err = load_with(&[("OPENROUTER_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let err = load_with(&[("OPENROUTER_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
