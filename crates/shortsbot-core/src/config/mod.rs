//! Configuration module for shortsbot.
//!
//! Loads typed configuration from `config.json` in the working directory or
//! `~/.shortsbot/config.json`. All fields use `serde` with defaults, so an
//! empty file is a valid config.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_IDLE_TIMEOUT_MINS;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub agent: AgentConfig,
    pub sessions: SessionsConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Priority:
    /// 1. local `config.json` in current directory
    /// 2. `~/.shortsbot/config.json`
    ///
    /// Missing files yield the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let paths = vec![PathBuf::from("config.json"), Self::default_path()];

        for path in paths {
            if path.exists() {
                tracing::debug!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                let config: Config = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path (`~/.shortsbot/config.json`).
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the default config directory path.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shortsbot")
    }

    /// Write the default config template to disk.
    pub fn write_default_template() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::json!({
            "providers": {
                "local": {
                    "apiKey": "not-needed",
                    "apiBase": "http://localhost:8080/v1"
                },
                "openrouter": {
                    "apiKey": "sk-or-v1-YOUR_KEY_HERE"
                }
            },
            "agent": {
                "model": "mistral-7b-instruct"
            }
        });

        std::fs::write(&path, serde_json::to_string_pretty(&template)?)?;
        Ok(path)
    }

    /// Validate configuration and return actionable error messages.
    ///
    /// The rule-based stages work without any provider; a missing provider
    /// only degrades the generative fallback, so it is reported as a
    /// warning-level message rather than blocking startup.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.agent.model.is_empty() {
            errors.push("agent.model is empty. Specify a model name.".into());
        }
        if self.sessions.idle_timeout_mins <= 0 {
            errors.push("sessions.idleTimeoutMins must be positive.".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ── Provider Configuration ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderEntry {
    pub api_key: String,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub local: Option<ProviderEntry>,
    pub openrouter: Option<ProviderEntry>,
    pub openai: Option<ProviderEntry>,
    pub groq: Option<ProviderEntry>,
}

impl ProvidersConfig {
    /// Find the first configured provider (non-empty, non-placeholder key).
    ///
    /// Local servers come first so a running llama.cpp instance wins over a
    /// hosted key.
    pub fn find_active(&self) -> Option<(&'static str, &ProviderEntry)> {
        let placeholder_prefixes = ["YOUR_", "sk-or-v1-YOUR", "sk-YOUR"];

        let candidates: [(&'static str, &Option<ProviderEntry>); 4] = [
            ("local", &self.local),
            ("openrouter", &self.openrouter),
            ("openai", &self.openai),
            ("groq", &self.groq),
        ];

        candidates.into_iter().find_map(|(name, entry)| {
            let e = entry.as_ref()?;
            let real = !e.api_key.is_empty()
                && !placeholder_prefixes.iter().any(|p| e.api_key.contains(p));
            real.then_some((name, e))
        })
    }
}

// ── Agent Configuration ──

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "mistral-7b-instruct".into(),
            max_tokens: 128,
            temperature: 0.5,
        }
    }
}

// ── Session Configuration ──

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionsConfig {
    pub idle_timeout_mins: i64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self { idle_timeout_mins: DEFAULT_IDLE_TIMEOUT_MINS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_a_valid_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.agent.max_tokens, 128);
        assert_eq!(config.agent.temperature, 0.5);
        assert_eq!(config.sessions.idle_timeout_mins, DEFAULT_IDLE_TIMEOUT_MINS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn placeholder_keys_are_not_active() {
        let config: Config = serde_json::from_str(
            r#"{
                "providers": {
                    "openrouter": { "apiKey": "sk-or-v1-YOUR_KEY_HERE" },
                    "openai": { "apiKey": "sk-real-key" }
                }
            }"#,
        )
        .unwrap();
        let (name, entry) = config.providers.find_active().unwrap();
        assert_eq!(name, "openai");
        assert_eq!(entry.api_key, "sk-real-key");
    }

    #[test]
    fn local_provider_wins_over_hosted() {
        let config: Config = serde_json::from_str(
            r#"{
                "providers": {
                    "openai": { "apiKey": "sk-real-key" },
                    "local": { "apiKey": "not-needed", "apiBase": "http://localhost:8080/v1" }
                }
            }"#,
        )
        .unwrap();
        let (name, _) = config.providers.find_active().unwrap();
        assert_eq!(name, "local");
    }

    #[test]
    fn validate_flags_bad_values() {
        let config: Config = serde_json::from_str(
            r#"{ "agent": { "model": "" }, "sessions": { "idleTimeoutMins": 0 } }"#,
        )
        .unwrap();
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
