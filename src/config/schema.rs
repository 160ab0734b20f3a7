//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::storage::STORAGE_KEY;
use crate::store::StoreOptions;

/// Settings read from `config.yml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftlogConfig {
    /// Report unknown ids and locked sessions as errors.
    pub strict: bool,

    /// Refuse set-level edits to today's session once it is completed.
    pub lock_completed_sessions: bool,

    /// Storage key the document is saved under.
    pub storage_key: String,
}

impl Default for LiftlogConfig {
    fn default() -> Self {
        Self {
            strict: false,
            lock_completed_sessions: false,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl LiftlogConfig {
    /// Store options for this configuration.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            strict: self.strict,
            lock_completed_sessions: self.lock_completed_sessions,
            storage_key: self.storage_key.clone(),
        }
    }
}
