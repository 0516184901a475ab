//! Trait abstraction for preference storage to enable mocking in tests

use anyhow::Result;

/// Local key/value storage for user preferences
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
