use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::language::LanguageCode;

pub const CONFIG_FILE_NAME: &str = ".adi18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_dir", alias = "messagesRoot")]
    pub messages_dir: String,
    #[serde(default)]
    pub primary_language: LanguageCode,
    /// Preference file; the platform config dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
}

fn default_messages_dir() -> String {
    "./locales".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_dir: default_messages_dir(),
            primary_language: LanguageCode::default(),
            storage_path: None,
        }
    }
}

impl Config {
    /// Resolve relative paths against the directory holding the config.
    pub fn messages_dir_in(&self, base: &Path) -> PathBuf {
        base.join(without_cur_dir(&self.messages_dir))
    }

    pub fn storage_path_in(&self, base: &Path) -> Option<PathBuf> {
        self.storage_path.as_ref().map(|p| base.join(without_cur_dir(p)))
    }
}

/// `./locales` -> `locales`, so joined paths print cleanly.
fn without_cur_dir(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            log::debug!("loaded config from {:?}", path);
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
