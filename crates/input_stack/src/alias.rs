//! Indirection from logical action names to physical axis names.
//!
//! Contexts bound with aliasing enabled use action names ("Jump") as keys;
//! the table decides which axis ("Vertical") is polled for them, so controls
//! can be remapped without touching binding code.

use crate::error::AliasError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One `(action, axis)` pair, the unit of alias configuration and export.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasEntry {
    pub action: String,
    pub axis: String,
}

impl AliasEntry {
    pub fn new(action: impl Into<String>, axis: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            axis: axis.into(),
        }
    }
}

/// Logical action name → physical axis name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from configuration pairs.
    ///
    /// The first entry for an action wins; later duplicates are logged and
    /// dropped.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a AliasEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            match table.entries.entry(entry.action.clone()) {
                Entry::Occupied(existing) => {
                    warn!(
                        action = %entry.action,
                        kept = %existing.get(),
                        dropped = %entry.axis,
                        "duplicate alias entry, check the alias config"
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.axis.clone());
                }
            }
        }
        table
    }

    /// The raw mapping.
    pub fn get(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// Replace the whole mapping.
    pub fn set(&mut self, entries: IndexMap<String, String>) {
        self.entries = entries;
    }

    /// Physical axis bound to `action`.
    pub fn resolve(&self, action: &str) -> Option<&str> {
        self.entries.get(action).map(String::as_str)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.entries.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Point an existing action at a different axis.
    pub fn rename(&mut self, action: &str, axis: impl Into<String>) -> Result<(), AliasError> {
        match self.entries.get_mut(action) {
            Some(current) => {
                *current = axis.into();
                Ok(())
            }
            None => Err(AliasError::UnknownAction(action.to_string())),
        }
    }

    /// Exchange the axes of two existing actions.
    pub fn swap(&mut self, action: &str, other: &str) -> Result<(), AliasError> {
        let a = self
            .entries
            .get_index_of(action)
            .ok_or_else(|| AliasError::UnknownAction(action.to_string()))?;
        let b = self
            .entries
            .get_index_of(other)
            .ok_or_else(|| AliasError::UnknownAction(other.to_string()))?;
        if a == b {
            return Ok(());
        }

        let axis_a = self.entries[a].clone();
        let axis_b = std::mem::replace(&mut self.entries[b], axis_a);
        self.entries[a] = axis_b;
        Ok(())
    }

    /// The table as an ordered pair list, ready to be written back to disk.
    pub fn export(&self) -> Vec<AliasEntry> {
        self.entries
            .iter()
            .map(|(action, axis)| AliasEntry::new(action.as_str(), axis.as_str()))
            .collect()
    }
}
