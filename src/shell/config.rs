// Host configuration read from the environment.
//
// - GROOMING_DATA_DIR: directory holding the storage files (default ./data).
// - GROOMING_STORAGE_KEY: storage key, and file stem, of the appointment list.
// - Unset variables take the default; a variable set to an empty value is an error.
// - The storage key must name a plain file: no path separators, no leading dot.

use crate::modules::appointments::adapters::outbound::persistence::STORAGE_KEY;
use crate::shared::infrastructure::key_value_storage::file_system::FileStorage;
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "GROOMING_DATA_DIR";
pub const STORAGE_KEY_VAR: &str = "GROOMING_STORAGE_KEY";
const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("GROOMING_STORAGE_KEY={0:?} is not a plain file name")]
    InvalidStorageKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let data_dir = match non_empty(&lookup, DATA_DIR_VAR)? {
            Some(dir) => PathBuf::from(dir),
            None => defaults.data_dir,
        };
        let storage_key = non_empty(&lookup, STORAGE_KEY_VAR)?.unwrap_or(defaults.storage_key);
        if !FileStorage::is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidStorageKey(storage_key));
        }

        Ok(Self {
            data_dir,
            storage_key,
        })
    }
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        other => Ok(other),
    }
}
