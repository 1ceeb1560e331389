pub mod catalog;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub use catalog::{CatalogError, WorkoutCatalog};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub plan: PlanConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Chat completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Replaces the bundled workout catalog when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    30
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.vyra/)
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("VYRA_HOME") {
            return Ok(PathBuf::from(home));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".vyra"))
    }

    /// Get config file path (~/.vyra/config.toml, or $VYRA_CONFIG)
    pub fn config_file() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("VYRA_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file()?)
    }

    /// Load configuration from a file, using defaults when it does not exist
    pub fn load_from(config_file: PathBuf) -> Result<Self> {
        if !config_file.exists() {
            tracing::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file()?)
    }

    pub fn save_to(&self, config_file: PathBuf) -> Result<()> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Workout catalog from `plan.catalog_path`, or the bundled one
    pub fn workout_catalog(&self) -> Result<WorkoutCatalog> {
        let catalog = match &self.plan.catalog_path {
            Some(path) => WorkoutCatalog::from_path(path)
                .with_context(|| format!("Failed to load workout catalog from {:?}", path))?,
            None => WorkoutCatalog::builtin().context("Bundled workout catalog is invalid")?,
        };

        // Missing beginner lists still plan, using a placeholder session
        if let Err(e) = catalog.validate() {
            tracing::warn!("Workout catalog is incomplete: {}", e);
        }

        Ok(catalog)
    }
}
