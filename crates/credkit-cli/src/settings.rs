//! Settings persisted as a flat TOML table.

use anyhow::{Context, Result};
use credkit_core::ports::SettingsStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub struct TomlSettings {
    path: PathBuf,
}

impl TomlSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings: {}", self.path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings: {}", self.path.display()))
    }
}

impl SettingsStore for TomlSettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| {
                    format!("Failed to create settings directory: {}", parent.display())
                })?;
        }
        let contents = toml::to_string(&values).context("Failed to serialize settings")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings: {}", self.path.display()))
    }
}
