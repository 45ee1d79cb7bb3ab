//! Cookie Consent
//!
//! Tri-state consent flag persisted under a fixed storage key. Any stored
//! value means the visitor has answered; only `"true"` counts as accepted.

use crate::constants::CONSENT_STORAGE_KEY;
use crate::error::Result;
use crate::helpers::KeyValueStore;

/// Persisted consent decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsentState {
    /// No answer recorded yet
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Whether the banner still needs to be shown
    pub fn needs_prompt(self) -> bool {
        self == ConsentState::Unset
    }

    fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") => ConsentState::Unset,
            Some("true") => ConsentState::Accepted,
            Some(_) => ConsentState::Declined,
        }
    }
}

/// Consent flag on top of a durable key-value store
pub struct ConsentStore {
    storage: Box<dyn KeyValueStore>,
}

impl ConsentStore {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Read the recorded decision
    pub fn read_consent(&self) -> Result<ConsentState> {
        let value = self.storage.get(CONSENT_STORAGE_KEY)?;
        Ok(ConsentState::from_stored(value.as_deref()))
    }

    /// Record the visitor's answer
    pub fn write_consent(&mut self, accepted: bool) -> Result<()> {
        let value = if accepted { "true" } else { "false" };
        self.storage.set(CONSENT_STORAGE_KEY, value)
    }
}

impl std::fmt::Debug for ConsentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{MemoryStore, TomlFileStore};

    #[test]
    fn fresh_storage_is_unset() {
        let store = ConsentStore::new(MemoryStore::new());
        assert_eq!(store.read_consent().unwrap(), ConsentState::Unset);
        assert!(store.read_consent().unwrap().needs_prompt());
    }

    #[test]
    fn answers_are_stored_as_boolean_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.toml");

        let mut store = ConsentStore::new(TomlFileStore::at(&path));
        store.write_consent(false).unwrap();
        assert_eq!(
            TomlFileStore::at(&path).get(CONSENT_STORAGE_KEY).unwrap().as_deref(),
            Some("false")
        );

        store.write_consent(true).unwrap();
        let reloaded = ConsentStore::new(TomlFileStore::at(&path));
        assert_eq!(reloaded.read_consent().unwrap(), ConsentState::Accepted);
    }

    #[test]
    fn unexpected_values_still_count_as_answered() {
        assert_eq!(ConsentState::from_stored(Some("yes")), ConsentState::Declined);
        assert_eq!(ConsentState::from_stored(Some("")), ConsentState::Unset);
    }
}
