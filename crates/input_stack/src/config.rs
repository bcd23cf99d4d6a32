use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings used to build an [`InputStack`](crate::InputStack).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputStackConfig {
    /// Resolve context keys through the alias table instead of using them as
    /// axis names.
    pub use_alias_table: bool,
    /// Alias JSON file loaded when `use_alias_table` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_file: Option<PathBuf>,
    /// Cancel executing bindings of a context when it leaves the top of the
    /// stack through a pop or a removal.
    pub cancel_on_exit: bool,
}

impl InputStackConfig {
    pub fn with_alias_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.use_alias_table = true;
        self.alias_file = Some(path.into());
        self
    }

    pub fn with_cancel_on_exit(mut self, enabled: bool) -> Self {
        self.cancel_on_exit = enabled;
        self
    }
}
