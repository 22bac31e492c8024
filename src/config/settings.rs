use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8787/callback";
const DEFAULT_SUMMARY_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub redirect_uri: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default)]
    pub summary_model: Option<String>,
}

impl Settings {
    pub fn client_id(&self) -> AppResult<&str> {
        self.client_id.as_deref().ok_or_else(|| {
            AppError::Config(
                "missing oauth client_id in profile settings. add it to your profile json"
                    .to_string(),
            )
        })
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn redirect_uri(&self) -> String {
        self.redirect_uri
            .clone()
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string())
    }

    /// Profile settings win; the GROQ_API_KEY environment variable is the
    /// fallback for users who keep the key out of config files.
    pub fn groq_api_key(&self) -> Option<String> {
        self.groq_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn summary_model(&self) -> String {
        self.summary_model
            .clone()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUMMARY_MODEL.to_string())
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_model_defaults_when_unset() {
        let settings = Settings::default();
        assert_eq!(settings.summary_model(), DEFAULT_SUMMARY_MODEL);

        let settings = Settings {
            summary_model: Some("  ".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.summary_model(), DEFAULT_SUMMARY_MODEL);
    }

    #[test]
    fn blank_profile_key_is_treated_as_missing() {
        let settings = Settings {
            groq_api_key: Some(String::new()),
            ..Settings::default()
        };
        // Falls through to the environment, which may or may not be set; a
        // blank profile value must never be returned as a key.
        if let Some(key) = settings.groq_api_key() {
            assert!(!key.trim().is_empty());
        }
    }
}
