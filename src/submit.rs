use crate::auth::Session;
use crate::core::field_registry::FieldRegistry;
use crate::core::section::Section;
use crate::state::record::FormRecord;
use crate::state::validation::{ValidationResult, validate_all};
use crate::state::wizard::Wizard;
use crate::store::{PersistenceError, RecordId, RecordStore, SubmittedRecord};
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{} section(s) failed validation", .0.len())]
    Invalid(Vec<ValidationResult>),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl SubmitError {
    pub fn failures(&self) -> &[ValidationResult] {
        match self {
            Self::Invalid(results) => results,
            Self::Persistence(_) => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Receipt {
    pub id: RecordId,
    pub record: SubmittedRecord,
}

/// Final commit step: re-checks every section, then hands the record to the store.
pub struct SubmissionGateway<S> {
    registry: Arc<FieldRegistry>,
    store: S,
}

impl<S: RecordStore> SubmissionGateway<S> {
    pub fn new(registry: Arc<FieldRegistry>, store: S) -> Self {
        Self { registry, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Submits a bare record, checking every section the registry knows.
    pub fn submit(&mut self, record: &FormRecord, session: &Session) -> Result<Receipt, SubmitError> {
        let sections = self.registry.sections();
        self.submit_sections(&sections, record, session)
    }

    /// Submits a record collected over `sections`; exactly those sections are checked.
    pub fn submit_sections(
        &mut self,
        sections: &[Section],
        record: &FormRecord,
        session: &Session,
    ) -> Result<Receipt, SubmitError> {
        let failures: Vec<_> = validate_all(&self.registry, sections, record)
            .into_iter()
            .filter(|result| !result.is_valid())
            .collect();
        if !failures.is_empty() {
            let sections: Vec<_> = failures.iter().map(|f| f.section.id()).collect();
            tracing::info!(?sections, "submission refused");
            return Err(SubmitError::Invalid(failures));
        }

        let submitted = SubmittedRecord {
            id: RecordId::generate(),
            submitted_at: Utc::now(),
            submitted_by: session.user().map(|user| user.email.clone()),
            values: record.clone(),
        };
        let id = self.store.save_record(&submitted).inspect_err(|err| {
            tracing::warn!(error = %err, "record could not be saved");
        })?;
        tracing::info!(%id, "record submitted");
        Ok(Receipt {
            id,
            record: submitted,
        })
    }
}

impl Wizard {
    /// Submits the wizard's record; the wizard is reset only when the store accepts it.
    pub fn submit<S: RecordStore>(
        &mut self,
        gateway: &mut SubmissionGateway<S>,
        session: &Session,
    ) -> Result<Receipt, SubmitError> {
        match gateway.submit_sections(self.sections(), self.record(), session) {
            Ok(receipt) => {
                self.reset();
                Ok(receipt)
            }
            Err(err) => {
                let current = self.current_section();
                if let Some(result) = err.failures().iter().find(|r| r.section == current) {
                    self.surface(result.clone());
                }
                Err(err)
            }
        }
    }
}
