//! Key-value document storage and the persisted application state.
//!
//! The core reads and writes exactly one JSON document (the profile plus
//! diary and plan history) through the [`KvStore`] interface, so the state
//! logic stays independent of storage technology. [`FileStore`] is the
//! production implementation: one pretty-printed JSON file per key under
//! the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::diary::{CravingEvent, DailyCheckin, SessionCompletion};
use crate::error::{Result, StorageError};
use crate::plan::IfThenRule;
use crate::profile::UserProfile;

/// Minimal key-value document store.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(super::data_dir()?))
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed { path, source: e }.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key);
        std::fs::write(&path, value)
            .map_err(|e| StorageError::WriteFailed { path, source: e })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed { path, source: e }.into()),
        }
    }
}

/// The one persisted document: profile plus all diary and plan history.
///
/// Absent collections deserialize as empty so documents written by older
/// builds keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub checkins: Vec<DailyCheckin>,
    #[serde(default)]
    pub craving_events: Vec<CravingEvent>,
    #[serde(default)]
    pub session_completions: Vec<SessionCompletion>,
    #[serde(default)]
    pub if_then_rules: Vec<IfThenRule>,
}

impl AppState {
    /// Fixed storage key for the state document.
    pub const STATE_KEY: &'static str = "rewire-state";

    /// Load the document from `store`, defaulting when absent.
    ///
    /// # Errors
    /// Returns `StorageError::Corrupt` when a document exists but cannot
    /// be parsed - data loss is surfaced, never silently reset.
    pub fn load(store: &dyn KvStore) -> Result<Self> {
        match store.get(Self::STATE_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                StorageError::Corrupt {
                    key: Self::STATE_KEY.to_string(),
                    message: e.to_string(),
                }
                .into()
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &dyn KvStore) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        store.set(Self::STATE_KEY, &json)
    }
}
