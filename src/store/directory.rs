use crate::state::draft::Draft;
use crate::store::{DraftStore, PersistenceError, RecordId, RecordStore, SubmittedRecord};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DRAFTS_DIR: &str = "drafts";

/// Stores each record as `<id>.json` and each draft as `drafts/<owner>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root = root.into();
        fs::create_dir_all(root.join(DRAFTS_DIR))?;
        tracing::debug!(root = %root.display(), "opened record directory");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, id: RecordId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    pub fn load_record(&self, id: RecordId) -> Result<Option<SubmittedRecord>, PersistenceError> {
        read_json(&self.record_path(id))
    }

    fn draft_path(&self, owner: &str) -> PathBuf {
        self.root
            .join(DRAFTS_DIR)
            .join(format!("{}.json", sanitize(owner)))
    }
}

impl RecordStore for DirectoryStore {
    fn save_record(&mut self, record: &SubmittedRecord) -> Result<RecordId, PersistenceError> {
        let path = self.record_path(record.id);
        fs::write(&path, serde_json::to_vec_pretty(record)?)?;
        tracing::info!(path = %path.display(), "record written");
        Ok(record.id)
    }
}

impl DraftStore for DirectoryStore {
    fn save_draft(&mut self, owner: &str, draft: &Draft) -> Result<(), PersistenceError> {
        fs::write(self.draft_path(owner), serde_json::to_vec_pretty(draft)?)?;
        Ok(())
    }

    fn load_draft(&self, owner: &str) -> Result<Option<Draft>, PersistenceError> {
        read_json(&self.draft_path(owner))
    }

    fn discard_draft(&mut self, owner: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.draft_path(owner)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

// Owners are emails; keep file names portable.
fn sanitize(owner: &str) -> String {
    owner
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}
