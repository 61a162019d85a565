use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GastosError, Result};
use crate::voice::NumberPolicy;

/// Environment variable pointing at an alternative settings file.
pub const CONFIG_ENV: &str = "GASTOS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub number_policy: NumberPolicy,
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_user_id() -> String {
    "user1".to_string()
}

fn default_seed_demo() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            number_policy: NumberPolicy::default(),
            seed_demo: default_seed_demo(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("gastos")
}

pub fn settings_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join("settings.json"),
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing file means defaults; so does a file that doesn't parse, with a
/// warning.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            return Settings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("ignoring malformed settings in {}: {e}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| GastosError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
