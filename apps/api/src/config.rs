use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables (and `.env` if present).
/// Provider keys are optional: a missing key disables that provider at request time.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_model: String,
    pub gemini_api_base: String,
    pub openai_api_base: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the form UI. Static serving is off when unset.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            openai_api_base: env_or("OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: env_or("RUST_LOG", "info"),
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Defaults with no provider keys and unroutable API bases.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: None,
            openai_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            openai_api_base: "http://127.0.0.1:9".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            static_dir: None,
        }
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(3000),
        Some(s) => s
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_3000() {
        assert_eq!(parse_port(None).unwrap(), 3000);
        assert_eq!(parse_port(Some("  ")).unwrap(), 3000);
    }

    #[test]
    fn test_port_parses_number() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    }

    #[test]
    fn test_invalid_port_is_error_with_context() {
        let err = parse_port(Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" key ".to_string())), Some("key".to_string()));
    }
}
