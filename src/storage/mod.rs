//! Key-value persistence backends.
//!
//! The store persists its whole document as one JSON string under a single
//! key. Backends only move strings; they know nothing about the document.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Key under which the document is stored.
pub const STORAGE_KEY: &str = "swt:data:v1";

/// A string key-value store.
pub trait Storage {
    /// Read the value for `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
