use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::countdown::NextYearRule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("config fetch failed: status {0}")]
    Status(u16),
    #[error("config decode failed: {0}")]
    Decode(String),
    #[error("unknown next year rule: {0}")]
    UnknownRule(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub display_target_id: String,
    pub next_year_rule: NextYearRule,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            display_target_id: "countdown".to_string(),
            next_year_rule: NextYearRule::default(),
        }
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => {
                tracing::debug!(
                    target_id = %config.display_target_id,
                    rule = %config.next_year_rule,
                    "config: loaded"
                );
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using default config");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::debug!("config: /config.json unavailable ({err}), trying assets");
            fetch_config_from("/assets/config.json").await
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, ConfigError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| ConfigError::Decode(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    Ok(config_from_lookup(|key| std::env::var(key).ok()))
}

pub fn config_from_lookup<F>(lookup: F) -> RuntimeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RuntimeConfig::default();
    let display_target_id = lookup("COUNTDOWN_TARGET_ID")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.display_target_id);
    let next_year_rule = match lookup("COUNTDOWN_NEXT_YEAR_RULE") {
        Some(value) => value.parse::<NextYearRule>().unwrap_or_else(|err| {
            tracing::warn!("{err}; keeping {}", defaults.next_year_rule);
            defaults.next_year_rule
        }),
        None => defaults.next_year_rule,
    };
    RuntimeConfig {
        display_target_id,
        next_year_rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"next_year_rule":"corrected"}"#).unwrap();
        assert_eq!(
            config,
            RuntimeConfig {
                display_target_id: "countdown".to_string(),
                next_year_rule: NextYearRule::Corrected,
            }
        );
    }

    #[test]
    fn empty_json_is_the_default() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.next_year_rule, NextYearRule::Legacy);
    }

    #[test]
    fn unknown_rule_in_json_is_rejected() {
        assert!(serde_json::from_str::<RuntimeConfig>(r#"{"next_year_rule":"never"}"#).is_err());
    }

    #[test]
    fn json_rule_matches_like_env_rule() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{"display_target_id":"next-halloween","next_year_rule":" Corrected"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            RuntimeConfig {
                display_target_id: "next-halloween".to_string(),
                next_year_rule: NextYearRule::Corrected,
            }
        );
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = config_from_lookup(|key| match key {
            "COUNTDOWN_TARGET_ID" => Some("next-halloween".to_string()),
            "COUNTDOWN_NEXT_YEAR_RULE" => Some("corrected".to_string()),
            _ => None,
        });
        assert_eq!(config.display_target_id, "next-halloween");
        assert_eq!(config.next_year_rule, NextYearRule::Corrected);
    }

    #[test]
    fn blank_target_id_falls_back() {
        let config = config_from_lookup(|key| {
            (key == "COUNTDOWN_TARGET_ID").then(|| "  ".to_string())
        });
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn bad_rule_keeps_the_other_fields() {
        let config = config_from_lookup(|key| match key {
            "COUNTDOWN_TARGET_ID" => Some("next-halloween".to_string()),
            "COUNTDOWN_NEXT_YEAR_RULE" => Some("plus-one".to_string()),
            _ => None,
        });
        assert_eq!(
            config,
            RuntimeConfig {
                display_target_id: "next-halloween".to_string(),
                next_year_rule: NextYearRule::Legacy,
            }
        );
    }
}
