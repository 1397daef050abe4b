use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Base URL the per-date changelog markdown is fetched from;
    /// `<date>.md` is appended per request.
    #[serde(default = "default_changelog_url")]
    pub changelog_url: String,

    /// Human-facing changelog index linked from the note byline.
    #[serde(default = "default_changelog_index_url")]
    pub changelog_index_url: String,

    /// Base URL for banner images referenced from front matter.
    #[serde(default = "default_image_url")]
    pub image_url: String,

    #[serde(default = "default_panel_title")]
    pub panel_title: String,
}

fn default_changelog_url() -> String {
    "https://raw.githubusercontent.com/gitpod-io/website/main/src/lib/contents/changelog".to_string()
}

fn default_changelog_index_url() -> String {
    "https://gitpod.io/changelog".to_string()
}

fn default_image_url() -> String {
    "https://www.gitpod.io/images/changelog".to_string()
}

fn default_panel_title() -> String {
    "Release Note".to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            changelog_url: default_changelog_url(),
            changelog_index_url: default_changelog_index_url(),
            image_url: default_image_url(),
            panel_title: default_panel_title(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse panel config: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::error::Result<()> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("relnote");
        path.push("config.json");
        path
    }

    /// URL of the changelog markdown for a given publish date.
    pub fn changelog_url_for(&self, date: &str) -> String {
        format!("{}/{}.md", self.changelog_url.trim_end_matches('/'), date)
    }
}
