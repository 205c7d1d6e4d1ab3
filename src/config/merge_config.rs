use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs: InputsConfig,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inputs: InputsConfig::default(),
            output: PathBuf::from("assets/hanja_combined.json"),
        }
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        InputsConfig {
            first: PathBuf::from("assets/hanja1.json"),
            second: PathBuf::from("assets/hanja2.json"),
        }
    }
}

impl Config {
    pub fn read_from_file(file: &Path) -> Result<Config> {
        let f = std::fs::File::open(file)
            .with_context(|| format!("Tried to read merge config from {file:?}"))?;
        serde_yaml::from_reader(f).with_context(|| format!("Invalid merge config in {file:?}"))
    }

    /// Reads `file` when given, otherwise `config.yaml` from the working
    /// directory if it exists, otherwise the built-in asset locations.
    pub fn resolve(file: Option<&Path>) -> Result<Config> {
        match file {
            Some(file) => Config::read_from_file(file),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Config::read_from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}
