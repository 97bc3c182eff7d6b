use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

pub const APP_DIR: &str = "moomenu";
pub const DATA_FILE: &str = "people.json";
pub const DATA_ENV: &str = "MOOMENU_DATA";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self { data_file: data_file.into() }
    }

    /// Resolves the data file: explicit path first, then `MOOMENU_DATA`,
    /// then `<config dir>/moomenu/people.json`.
    pub fn resolve(cli_path: Option<&Path>) -> StoreResult<Self> {
        let env_path = std::env::var_os(DATA_ENV).map(PathBuf::from);
        Self::resolve_from(cli_path, env_path, dirs::config_dir())
    }

    pub(crate) fn resolve_from(
        cli_path: Option<&Path>,
        env_path: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> StoreResult<Self> {
        if let Some(path) = cli_path {
            return Ok(Self::new(path));
        }
        if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self::new(path));
        }
        config_dir
            .map(|dir| Self::new(dir.join(APP_DIR).join(DATA_FILE)))
            .ok_or(StoreError::NoConfigDir)
    }
}
