use anyhow::{Context, Result};

use crate::i18n::Lang;

/// Application configuration loaded from environment variables.
/// Every variable is optional; bad values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Language used when a request names none or an unsupported one.
    pub default_lang: Lang,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_lang: match std::env::var("DEFAULT_LANG") {
                Ok(tag) => tag
                    .parse()
                    .with_context(|| format!("DEFAULT_LANG must be one of zh, en, es (got '{tag}')"))?,
                Err(_) => Lang::default(),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_lang: Lang::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_lang, Lang::Zh);
    }
}
