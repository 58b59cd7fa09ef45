//! API key resolution.
//!
//! Two sources, strict precedence: the `GEMINI_API_KEY` environment variable
//! wins; the `geminiApiKey` field of `~/.gemini/settings.json` is the
//! fallback. A missing, unreadable, or malformed settings file maps to
//! "no value" rather than an error: the file is a best-effort source, and
//! the caller only fails once every source has come up empty.

use crate::error::{ChlogError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings file location relative to the user's home directory.
pub const SETTINGS_DIR: &str = ".gemini";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Deserialize)]
struct GeminiSettings {
    #[serde(default, rename = "geminiApiKey")]
    gemini_api_key: Option<String>,
}

/// `<home>/.gemini/settings.json`
pub fn settings_path(home: &Path) -> PathBuf {
    home.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Resolve the API key from the ambient environment and home directory.
pub fn resolve() -> Result<String> {
    let env_value = std::env::var(API_KEY_ENV).ok();
    resolve_with(env_value, home::home_dir().as_deref())
}

/// Resolve the API key from explicit inputs. The environment value strictly
/// takes precedence; the settings file is not consulted when it is present
/// and non-empty.
pub fn resolve_with(env_value: Option<String>, home: Option<&Path>) -> Result<String> {
    if let Some(key) = env_value.filter(|v| !v.is_empty()) {
        return Ok(key);
    }
    if let Some(key) = home.and_then(from_settings_file) {
        return Ok(key);
    }
    Err(ChlogError::MissingCredential)
}

/// Read the key from `<home>/.gemini/settings.json`, treating every failure
/// (absent file, unreadable file, malformed JSON, missing field) as `None`.
fn from_settings_file(home: &Path) -> Option<String> {
    let path = settings_path(home);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("could not read {}: {e}", path.display());
            return None;
        }
    };
    let settings: GeminiSettings = match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::debug!("could not parse {}: {e}", path.display());
            return None;
        }
    };
    settings.gemini_api_key.filter(|v| !v.is_empty())
}
