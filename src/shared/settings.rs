use crate::shared::error::{AppError, AppResult};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

/// Fallback poll interval when the configured delay is unusable.
const DEFAULT_DELAY_SECS: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub core: CoreSettings,
    #[serde(default)]
    pub language: LanguageSettings,
    #[serde(default)]
    pub font: FontSettings,
    #[serde(default)]
    pub resources: ResourceSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreSettings {
    /// Poll interval in seconds between clipboard reads.
    pub delay: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub source: String,
    pub target: String,
}

/// Display-only preferences, kept for compatibility with the config document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSettings {
    pub family: String,
    pub style: String,
    pub size: u32,
    pub color: String,
}

/// Display-only resource paths, not interpreted by the monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSettings {
    pub img: String,
    pub icon: String,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY_SECS,
        }
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            source: "en".to_string(),
            target: "es".to_string(),
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        let family = if cfg!(target_os = "linux") {
            "Ubuntu"
        } else {
            "Arial"
        };
        Self {
            family: family.to_string(),
            style: "Bold".to_string(),
            size: 12,
            color: "#000000".to_string(),
        }
    }
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            img: "resources/img".to_string(),
            icon: "resources/icon".to_string(),
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "lingoclip", "lingoclip")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load settings from disk, writing a default document on first run.
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            info!("Creating new configuration file with default configuration");
            let settings = Self::default();
            settings.save().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Rewrite the whole configuration document on disk.
    pub async fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Poll interval as a duration, falling back to the default when the
    /// configured value is non-positive or not finite.
    pub fn delay(&self) -> Duration {
        let delay = self.core.delay;
        if delay.is_finite() && delay > 0.0 {
            Duration::from_secs_f64(delay)
        } else {
            warn!(
                "Invalid delay {:?} in configuration, using default of {}s",
                delay, DEFAULT_DELAY_SECS
            );
            Duration::from_secs_f64(DEFAULT_DELAY_SECS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_original_document() {
        let settings = AppSettings::default();
        assert_eq!(settings.core.delay, 0.5);
        assert_eq!(settings.language.source, "en");
        assert_eq!(settings.language.target, "es");
        assert_eq!(settings.font.size, 12);
        assert_eq!(settings.resources.img, "resources/img");
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.core.delay, settings.core.delay);
        assert_eq!(parsed.language.source, settings.language.source);
        assert_eq!(parsed.language.target, settings.language.target);
    }

    #[test]
    fn partial_document_fills_missing_sections() {
        let parsed: AppSettings =
            serde_json::from_str(r#"{"language": {"source": "de", "target": "fr"}}"#).unwrap();
        assert_eq!(parsed.language.source, "de");
        assert_eq!(parsed.language.target, "fr");
        assert_eq!(parsed.core.delay, 0.5);
    }

    #[test]
    fn delay_falls_back_when_unusable() {
        let mut settings = AppSettings::default();

        settings.core.delay = 0.25;
        assert_eq!(settings.delay(), Duration::from_millis(250));

        settings.core.delay = 0.0;
        assert_eq!(settings.delay(), Duration::from_millis(500));

        settings.core.delay = -1.0;
        assert_eq!(settings.delay(), Duration::from_millis(500));

        settings.core.delay = f64::NAN;
        assert_eq!(settings.delay(), Duration::from_millis(500));
    }
}
