pub mod directory;
pub mod memory;

use crate::state::draft::Draft;
use crate::state::record::FormRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A fully validated registration, ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub id: RecordId,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    pub values: FormRecord,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("an employee with ID `{0}` is already registered")]
    Duplicate(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait RecordStore {
    fn save_record(&mut self, record: &SubmittedRecord) -> Result<RecordId, PersistenceError>;
}

/// Unfinished registrations, keyed by whoever started them.
pub trait DraftStore {
    fn save_draft(&mut self, owner: &str, draft: &Draft) -> Result<(), PersistenceError>;

    fn load_draft(&self, owner: &str) -> Result<Option<Draft>, PersistenceError>;

    fn discard_draft(&mut self, owner: &str) -> Result<(), PersistenceError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &mut S {
    fn save_record(&mut self, record: &SubmittedRecord) -> Result<RecordId, PersistenceError> {
        (**self).save_record(record)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn save_record(&mut self, record: &SubmittedRecord) -> Result<RecordId, PersistenceError> {
        (**self).save_record(record)
    }
}
