use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::view::EmptyDays;

/// Directory under the project root holding per-project settings.
pub const CONFIG_DIR: &str = ".clientboard";

/// Environment variable overriding the data file location.
pub const DATA_ENV: &str = "CLIENTBOARD_DATA";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub week: WeekConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Data file, relative to the project root unless absolute.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default)]
    pub empty_days: EmptyDays,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[must_use]
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.toml")
}

/// Load `<root>/.clientboard/config.toml`, falling back to defaults.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file exists but cannot be read and
/// [`Error::Config`] if it does not parse.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig, Error> {
    load_toml(&project_config_path(project_root))
}

/// Load `<config_dir>/clientboard/config.toml`, falling back to defaults.
///
/// # Errors
///
/// Same as [`load_project_config`].
pub fn load_user_config() -> Result<UserConfig, Error> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_toml(&config_dir.join("clientboard/config.toml"))
}

fn load_toml<T: Default + for<'de> Deserialize<'de>>(path: &Path) -> Result<T, Error> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str::<T>(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the data file: explicit flag, then `CLIENTBOARD_DATA`, then the
/// project config. Relative paths resolve against `project_root`.
#[must_use]
pub fn resolve_data_path(
    project_root: &Path,
    flag: Option<&Path>,
    env_value: Option<&str>,
    config: &ProjectConfig,
) -> PathBuf {
    let chosen = flag
        .map(Path::to_path_buf)
        .or_else(|| {
            env_value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| config.store.path.clone());

    if chosen.is_absolute() {
        chosen
    } else {
        project_root.join(chosen)
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data.json")
}
