use crate::core::field_registry::FieldRegistry;
use crate::core::section::Section;
use crate::state::record::FormRecord;
use crate::state::wizard::{Wizard, WizardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Snapshot of an unfinished registration ("Save as Draft").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub sections: Vec<Section>,
    pub current: usize,
    #[serde(default)]
    pub completed: BTreeSet<Section>,
    #[serde(default)]
    pub visited: BTreeSet<Section>,
    pub record: FormRecord,
    pub saved_at: DateTime<Utc>,
}

impl Wizard {
    pub fn to_draft(&self) -> Draft {
        Draft {
            sections: self.sections().to_vec(),
            current: self.current_index(),
            completed: self.completed().clone(),
            visited: self.visited().clone(),
            record: self.record().clone(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuilds a wizard from a draft; an out-of-range position is clamped.
    pub fn from_draft(registry: Arc<FieldRegistry>, draft: Draft) -> Result<Self, WizardError> {
        Wizard::restore(
            registry,
            draft.sections,
            draft.current,
            draft.completed,
            draft.visited,
            draft.record,
        )
    }
}
