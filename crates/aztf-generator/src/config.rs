//! Settings loading.
//!
//! The API credential lives in a local JSON settings file. It is loaded
//! once at startup and passed by value into the client — never stored in
//! process-wide state.

use std::path::Path;

use serde::Deserialize;

/// Model requested from the completions endpoint when the settings file
/// does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Settings decoded from the JSON settings file.
///
/// ```json
/// { "OPENAI_API_KEY": "sk-...", "model": "gpt-3.5-turbo" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// API credential, sent as a bearer token on every request.
    #[serde(rename = "OPENAI_API_KEY")]
    pub api_key: String,

    /// Model identifier; [`DEFAULT_MODEL`] when absent.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// The credential is trimmed after decoding. An unreadable file,
    /// malformed JSON, or an empty credential is an error — a run cannot
    /// start without a usable key, so there is no recovery path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut settings: Settings =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        settings.api_key = settings.api_key.trim().to_string();
        if settings.api_key.is_empty() {
            return Err(ConfigError::MissingKey {
                path: path.display().to_string(),
            });
        }

        Ok(settings)
    }
}

/// Settings-file failures. All of them abort a run before any work begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("OPENAI_API_KEY is empty in {path}")]
    MissingKey { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_trims_key_and_defaults_model() {
        let file = write_settings(r#"{ "OPENAI_API_KEY": "  sk-test  " }"#);
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_load_honors_model_override() {
        let file = write_settings(r#"{ "OPENAI_API_KEY": "sk-test", "model": "gpt-4o" }"#);
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.model, "gpt-4o");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Settings::load(Path::new("does-not-exist/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_settings("{ not json");
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_absent_key_field_is_parse_error() {
        let file = write_settings(r#"{ "model": "gpt-4o" }"#);
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_blank_key_is_missing_key() {
        let file = write_settings(r#"{ "OPENAI_API_KEY": "   " }"#);
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
    }
}
