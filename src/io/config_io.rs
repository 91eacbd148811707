use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use toml_edit::{DocumentMut, Item, Table, Value};
use tracing::debug;

use crate::model::config::AppConfig;

/// Error type for reading and writing config.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    DocumentError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("invalid config key {0:?} (expected section.key)")]
    InvalidKey(String),
    #[error("invalid value for {key}: {source}")]
    InvalidValue {
        key: String,
        source: toml::de::Error,
    },
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tasklist").join("config.toml")
}

/// The `--config` override if given, else the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the config file as an editable document (empty if missing)
pub fn read_config_document(path: &Path) -> Result<DocumentMut, ConfigError> {
    if !path.exists() {
        return Ok(DocumentMut::new());
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse().map_err(|source| ConfigError::DocumentError {
        path: path.to_path_buf(),
        source,
    })
}

/// Set a dotted key (e.g. `defaults.priority` or `ui.priority_colors.high`),
/// creating intermediate tables. `true`/`false` become booleans, anything
/// else a string.
pub fn set_value(doc: &mut DocumentMut, key: &str, value: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = key.split('.').map(str::trim).collect();
    if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    let Some((leaf, tables)) = parts.split_last() else {
        return Err(ConfigError::InvalidKey(key.to_string()));
    };

    let mut table = doc.as_table_mut();
    for name in tables {
        if !table.contains_key(name) {
            table.insert(name, Item::Table(Table::new()));
        }
        table = table
            .get_mut(name)
            .and_then(Item::as_table_mut)
            .ok_or_else(|| ConfigError::InvalidKey(key.to_string()))?;
    }
    table.insert(leaf, toml_edit::value(scalar(value)));
    Ok(())
}

fn scalar(value: &str) -> Value {
    match value {
        "true" => Value::from(true),
        "false" => Value::from(false),
        other => Value::from(other),
    }
}

/// Check that an edited document still deserializes
pub fn validate(doc: &DocumentMut, key: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(&doc.to_string()).map_err(|source| ConfigError::InvalidValue {
        key: key.to_string(),
        source,
    })
}

/// Write the document to disk atomically, creating parent directories.
pub fn write_config(path: &Path, doc: &DocumentMut) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(doc.to_string().as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

/// Render the effective configuration as TOML
pub fn render_config(config: &AppConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
