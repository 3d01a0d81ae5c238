//! Application configuration

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};
use tracing::{info, warn};

use folio_core::{FadeConfig, NavigatorConfig};
use folio_ui::SlideCard;

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Everything the portfolio page needs to mount its slideshows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub navigator: NavigatorConfig,
    pub fade: FadeConfig,

    /// Slides of the physics-drag slideshow
    pub projects: Vec<SlideCard>,

    /// Slides of the fade slideshow
    pub highlights: Vec<SlideCard>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigator: NavigatorConfig::default(),
            fade: FadeConfig::default(),
            projects: vec![
                card("Terrain Renderer", "GPU heightfield streaming", [52, 94, 138]),
                card("Typeface Study", "Variable font explorations", [128, 64, 96]),
                card("Field Recorder", "Embedded audio capture", [60, 120, 88]),
                card("Transit Map", "Generative network layout", [150, 100, 48]),
            ],
            highlights: vec![
                card("Exhibited 2025", "", [70, 70, 110]),
                card("Open source", "", [90, 60, 60]),
                card("Teaching", "", [50, 100, 100]),
            ],
        }
    }
}

fn card(title: &str, caption: &str, color: [u8; 3]) -> SlideCard {
    SlideCard {
        title: title.to_string(),
        caption: caption.to_string(),
        color,
    }
}

impl AppConfig {
    /// Read and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.navigator.validate()?;
        config.fade.validate()?;
        Ok(config)
    }

    /// Configuration from the first CLI argument or `FOLIO_CONFIG`
    ///
    /// Falls back to defaults, with a warning, when the file cannot be used.
    pub fn load() -> Self {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .map(PathBuf::from);

        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}
