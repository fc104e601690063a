//! Loading and saving the global server list
//!
//! Format is picked from the file extension (`.toml` or `.json`).
//! Writes go to a locked temporary file in the same directory which is
//! then renamed over the target.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};
use crate::global::GlobalNxrmConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Json => "JSON",
        }
    }
}

/// Format-agnostic configuration file store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the global configuration. A missing file is an
    /// empty configuration.
    pub fn load_global(&self) -> Result<GlobalNxrmConfiguration> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No configuration file, starting empty");
            return Ok(GlobalNxrmConfiguration::new());
        }
        let global: GlobalNxrmConfiguration = self.load()?;
        global.validate()?;
        tracing::debug!(path = %self.path.display(), count = global.len(), "Loaded configuration");
        Ok(global)
    }

    pub fn save_global(&self, global: &GlobalNxrmConfiguration) -> Result<()> {
        self.save(global)?;
        tracing::info!(path = %self.path.display(), count = global.len(), "Saved configuration");
        Ok(())
    }

    /// Deserialize the file into `T`.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        let format = Format::detect(&self.path)?;
        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let parse_error = |message: String| Error::ConfigParse {
            path: self.path.clone(),
            format: format.name().into(),
            message,
        };

        match format {
            Format::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Serialize `value` and write it atomically.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let format = Format::detect(&self.path)?;
        let serialize_error = |message: String| Error::ConfigSerialize {
            path: self.path.clone(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
        };

        write_atomic(&self.path, content.as_bytes())
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NxrmConfiguration, ServerFields};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> GlobalNxrmConfiguration {
        GlobalNxrmConfiguration::from_servers(vec![
            NxrmConfiguration::nxrm3(ServerFields::new(
                "main",
                "int-main",
                "Main",
                "https://nexus.example.com",
                "cred",
            )),
            NxrmConfiguration::simple(ServerFields::new(
                "test",
                "int-test",
                "Test",
                "http://localhost:8081",
                "cred",
            )),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nxrm.toml"));
        assert!(store.load_global().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_toml() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nested").join("nxrm.toml"));

        store.save_global(&sample()).unwrap();
        assert_eq!(store.load_global().unwrap(), sample());
    }

    #[test]
    fn test_save_then_load_json() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nxrm.json"));

        store.save_global(&sample()).unwrap();
        assert_eq!(store.load_global().unwrap(), sample());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nxrm.toml"));
        store.save_global(&sample()).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["nxrm.toml".to_string()]);
    }

    #[test]
    fn test_unsupported_extension() {
        let store = ConfigStore::new("servers.ini");
        assert!(matches!(
            store.save_global(&sample()).unwrap_err(),
            Error::UnsupportedFormat { .. }
        ));
    }
}
