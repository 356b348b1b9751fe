//! TOML configuration. Every field has a default so a partial file loads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub css: CssConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub input_files: Vec<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            input_dir: PathBuf::from("."),
            input_files: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    pub prefix: String,
    pub tailwindcss: bool,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig {
            dir: PathBuf::from("."),
            file: "variables.css".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}
