use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "filegate";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory the source picker opens in.
    pub source_folder: Option<PathBuf>,
    /// Directory the destination picker opens in.
    pub destination_folder: Option<PathBuf>,
    /// Fraction of the card width a swipe has to exceed to commit.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_visible_cards")]
    pub visible_cards: usize,
    /// Fraction of the card width one arrow key press drags the card.
    #[serde(default = "default_drag_step")]
    pub drag_step: f64,
    #[serde(default)]
    pub match_extensions_any_case: bool,
    #[serde(default = "default_show_preview")]
    pub show_preview: bool,
    #[serde(default)]
    pub remember_folders: bool,
}

// Default value functions for serde
fn default_swipe_threshold() -> f64 {
    0.2
}
fn default_visible_cards() -> usize {
    4
}
fn default_drag_step() -> f64 {
    0.05
}
fn default_show_preview() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_folder: None,
            destination_folder: None,
            swipe_threshold: default_swipe_threshold(),
            visible_cards: default_visible_cards(),
            drag_step: default_drag_step(),
            match_extensions_any_case: false,
            show_preview: default_show_preview(),
            remember_folders: false,
        }
    }
}

impl Settings {
    /// Loads settings from the user's config directory, falling back to defaults
    /// when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// config file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?).await
    }

    /// Loads settings from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub async fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = tokio::fs::read_to_string(config_path).await?;
            let settings: Settings = toml::from_str(&content)?;
            info!("Settings loaded from {:?}", config_path);
            Ok(settings.validated())
        } else {
            Ok(Self::default())
        }
    }

    /// Saves settings to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(config_path, toml_string)?;

        info!("Settings saved to {:?}", config_path);
        Ok(())
    }

    /// Clamps values a hand-edited config file could get wrong.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold < 1.0) {
            tracing::warn!(
                "swipe_threshold {} out of range, using {}",
                self.swipe_threshold,
                default_swipe_threshold()
            );
            self.swipe_threshold = default_swipe_threshold();
        }
        if !(self.drag_step > 0.0 && self.drag_step <= 1.0) {
            tracing::warn!("drag_step {} out of range, using {}", self.drag_step, default_drag_step());
            self.drag_step = default_drag_step();
        }
        self.visible_cards = self.visible_cards.max(1);
        self
    }

    /// Path of the config file inside the user's config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }
}
