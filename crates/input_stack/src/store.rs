//! JSON persistence for alias tables.
//!
//! The file is a thin wrapper around the pair list produced by
//! [`AliasTable::export`], so whatever is saved can be fed straight back into
//! [`InputStack::initialize`](crate::InputStack::initialize).

use crate::alias::{AliasEntry, AliasTable};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root structure of alias JSON files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasFile {
    /// Schema version for migrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub entries: Vec<AliasEntry>,
}

impl AliasFile {
    /// Snapshot a table for writing.
    pub fn from_table(table: &AliasTable) -> Self {
        Self {
            schema_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            entries: table.export(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read alias file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse alias JSON {}", path.display()))
    }

    /// Write the file, creating missing parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write alias file {}", path.display()))?;
        Ok(())
    }
}
