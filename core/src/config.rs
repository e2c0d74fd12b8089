use crate::error::ConfigError;
use crate::session::Credential;
use crate::tools::ModelTier;
use std::time::Duration;

pub const DEFAULT_FAST_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_CAPABLE_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.pollinations.ai";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Model identifiers per tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMap {
    pub fast: String,
    pub capable: String,
}

impl ModelMap {
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast,
            ModelTier::Capable => &self.capable,
        }
    }
}

impl Default for ModelMap {
    fn default() -> Self {
        Self {
            fast: DEFAULT_FAST_MODEL.to_string(),
            capable: DEFAULT_CAPABLE_MODEL.to_string(),
        }
    }
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Option<Credential>,
    pub models: ModelMap,
    pub gemini_base_url: String,
    pub image_base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            models: ModelMap::default(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build from process environment.
    /// Optional: GOOGLE_API_KEY, AURA_FAST_MODEL, AURA_CAPABLE_MODEL,
    /// AURA_GEMINI_BASE_URL, AURA_IMAGE_BASE_URL, AURA_REQUEST_TIMEOUT_SECS
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout = match non_empty("AURA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "AURA_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        name: "AURA_REQUEST_TIMEOUT_SECS",
                        value: raw,
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            credential: non_empty("GOOGLE_API_KEY").map(Credential::new),
            models: ModelMap {
                fast: non_empty("AURA_FAST_MODEL").unwrap_or(defaults.models.fast),
                capable: non_empty("AURA_CAPABLE_MODEL").unwrap_or(defaults.models.capable),
            },
            gemini_base_url: non_empty("AURA_GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            image_base_url: non_empty("AURA_IMAGE_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.image_base_url),
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.credential.is_none());
        assert_eq!(config.models.model_for(ModelTier::Fast), DEFAULT_FAST_MODEL);
        assert_eq!(config.models.model_for(ModelTier::Capable), DEFAULT_CAPABLE_MODEL);
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "abc"),
            ("AURA_FAST_MODEL", "gemini-2.0-flash"),
            ("AURA_IMAGE_BASE_URL", "http://localhost:9000/"),
            ("AURA_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.credential.as_ref().map(|c| c.expose()), Some("abc"));
        assert_eq!(config.models.model_for(ModelTier::Fast), "gemini-2.0-flash");
        assert_eq!(config.image_base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "   ")])).unwrap();
        assert!(config.credential.is_none());
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("AURA_REQUEST_TIMEOUT_SECS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "AURA_REQUEST_TIMEOUT_SECS", .. })
        ));

        let zero = Config::from_lookup(lookup_from(&[("AURA_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(zero.is_err());
    }
}
