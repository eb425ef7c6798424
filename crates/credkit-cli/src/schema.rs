//! Local storage layout, one directory per table.

use anyhow::{Context, Result};
use credkit_core::ports::SchemaStore;
use std::path::PathBuf;

const TABLES: [&str; 4] = ["ciphers", "folders", "collections", "settings"];

pub struct DirSchema {
    root: PathBuf,
}

impl DirSchema {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SchemaStore for DirSchema {
    fn initialize(&self) -> Result<()> {
        for table in TABLES {
            let dir = self.root.join(table);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create table directory: {}", dir.display()))?;
        }
        tracing::info!("Local schema ready at {}", self.root.display());
        Ok(())
    }
}
