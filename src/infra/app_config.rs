use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const READ_EXTERNAL_STORAGE: &str = "android.permission.READ_EXTERNAL_STORAGE";
pub const WRITE_EXTERNAL_STORAGE: &str = "android.permission.WRITE_EXTERNAL_STORAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Load posts from this file instead of the bundled asset.
    pub asset_path: Option<PathBuf>,
    /// Where capture targets are created.
    pub pictures_dir: Option<PathBuf>,
    /// Capabilities the capture flow needs.
    pub storage_permissions: Vec<String>,
    /// Grant set for the static permission host. `None` grants everything.
    pub granted_permissions: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_path: None,
            pictures_dir: None,
            storage_permissions: vec![
                READ_EXTERNAL_STORAGE.to_string(),
                WRITE_EXTERNAL_STORAGE.to_string(),
            ],
            granted_permissions: None,
        }
    }
}

impl AppConfig {
    pub fn pictures_dir(&self) -> PathBuf {
        if let Some(dir) = &self.pictures_dir {
            return dir.clone();
        }
        dirs::picture_dir()
            .map(|dir| dir.join("postform"))
            .unwrap_or_else(|| data_home().join("Pictures"))
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config: {err}");
            AppConfig::default()
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var_os("POSTFORM_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_home().join("config.toml"))
}

/// Holds the config file and, without a pictures directory, captured images.
fn data_home() -> PathBuf {
    std::env::var_os("POSTFORM_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|dir| dir.join("postform")))
        .or_else(|| home::home_dir().map(|home| home.join(".postform")))
        .unwrap_or_else(|| PathBuf::from(".postform"))
}
