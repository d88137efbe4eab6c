use crate::core::field::FieldKey;
use crate::state::draft::Draft;
use crate::store::{DraftStore, PersistenceError, RecordId, RecordStore, SubmittedRecord};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<SubmittedRecord>,
    drafts: HashMap<String, Draft>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SubmittedRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&SubmittedRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Looks up a record by employee ID, ignoring surrounding whitespace.
    pub fn find_by_employee_id(&self, employee_id: &str) -> Option<&SubmittedRecord> {
        let employee_id = employee_id.trim();
        self.records.iter().find(|record| {
            record.values.text(FieldKey::EmployeeId).map(str::trim) == Some(employee_id)
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn save_record(&mut self, record: &SubmittedRecord) -> Result<RecordId, PersistenceError> {
        if let Some(employee_id) = record.values.text(FieldKey::EmployeeId).map(str::trim) {
            if self.find_by_employee_id(employee_id).is_some() {
                return Err(PersistenceError::Duplicate(employee_id.to_string()));
            }
        }
        self.records.push(record.clone());
        Ok(record.id)
    }
}

impl DraftStore for MemoryStore {
    fn save_draft(&mut self, owner: &str, draft: &Draft) -> Result<(), PersistenceError> {
        self.drafts.insert(owner.to_string(), draft.clone());
        Ok(())
    }

    fn load_draft(&self, owner: &str) -> Result<Option<Draft>, PersistenceError> {
        Ok(self.drafts.get(owner).cloned())
    }

    fn discard_draft(&mut self, owner: &str) -> Result<(), PersistenceError> {
        self.drafts.remove(owner);
        Ok(())
    }
}
