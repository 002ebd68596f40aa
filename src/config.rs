// config.rs

use std::env;

pub const PROMPT_VAR: &str = "HISTCALC_PROMPT";
pub const LOG_VAR: &str = "HISTCALC_LOG";

const DEFAULT_PROMPT: &str = "calc> ";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Config::default();
        if let Some(prompt) = lookup(PROMPT_VAR).filter(|p| !p.is_empty()) {
            config.prompt = prompt;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }
}
