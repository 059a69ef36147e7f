//! Persisted key/value properties and the settings derived from them.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::error::PropertiesError;

/// Flat string properties stored as a TOML table.
///
/// Nested tables are flattened into dotted keys on load, so `[cache] path = ".."`
/// and `"cache.path" = ".."` read the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub const DEFAULT_PATH: &'static str = "./app.toml";

    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path`, creating an empty file first when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropertiesError> {
        let path = path.as_ref();
        let io_err = |source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.exists() {
            info!(path = %path.display(), "creating empty property file");
            fs::write(path, "").map_err(io_err)?;
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path).map_err(io_err)?;
        let table: toml::Table = toml::from_str(&text).map_err(|source| PropertiesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut values = BTreeMap::new();
        flatten_into(&mut values, None, table);
        Ok(Self { values })
    }

    /// Write every property to `path`, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PropertiesError> {
        let path = path.as_ref();
        let text = toml::to_string(&self.values)?;
        fs::write(path, text).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Set `key` only when it is absent. Returns `true` if the value was inserted.
    pub fn set_default(&mut self, key: &str, value: &str) -> bool {
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten_into(values: &mut BTreeMap<String, String>, prefix: Option<&str>, table: toml::Table) {
    for (key, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            toml::Value::Table(nested) => flatten_into(values, Some(&key), nested),
            toml::Value::String(text) => {
                values.insert(key, text);
            }
            other => {
                values.insert(key, other.to_string());
            }
        }
    }
}

/// Paths used by a dump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSettings {
    pub cache_root: PathBuf,
    pub output: PathBuf,
    pub revision: u32,
}

impl DumpSettings {
    pub const CACHE_PATH_KEY: &'static str = "cache.path";
    pub const OUTPUT_PATH_KEY: &'static str = "output.path";
    pub const DEFAULT_CACHE_PATH: &'static str = "./cache";
    pub const DEFAULT_OUTPUT_PATH: &'static str = "./dump";

    pub fn from_properties(properties: &Properties, revision: u32) -> Self {
        let path = |key, default| PathBuf::from(properties.get(key).unwrap_or(default));
        Self {
            cache_root: path(Self::CACHE_PATH_KEY, Self::DEFAULT_CACHE_PATH),
            output: path(Self::OUTPUT_PATH_KEY, Self::DEFAULT_OUTPUT_PATH),
            revision,
        }
    }

    /// Cache directory for the selected revision.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_root.join(self.revision.to_string())
    }
}
