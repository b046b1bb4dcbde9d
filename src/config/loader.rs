use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filenames checked in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["throughput.toml", "throughput.json"];

/// Loads a configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    load_config_in(path, Path::new("."))
}

/// Like [`load_config`], but looks for the default files in `dir`.
/// An explicit `path` is used as given.
pub(crate) fn load_config_in(path: Option<&str>, dir: &Path) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        return Ok(Some(load_config_file(Path::new(path))?));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let candidate = dir.join(candidate);
        if candidate.exists() {
            return Ok(Some(load_config_file(&candidate)?));
        }
    }

    Ok(None)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
