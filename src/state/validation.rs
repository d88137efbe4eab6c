use crate::core::field::FieldKey;
use crate::core::field_registry::FieldRegistry;
use crate::core::section::Section;
use crate::core::validators;
use crate::state::record::FormRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Outcome of checking one section. Always recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub section: Section,
    pub errors: IndexMap<FieldKey, String>,
}

impl ValidationResult {
    pub fn valid(section: Section) -> Self {
        Self {
            section,
            errors: IndexMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn clear_error(&mut self, key: FieldKey) {
        self.errors.shift_remove(&key);
    }
}

pub fn validate_section(
    registry: &FieldRegistry,
    section: Section,
    record: &FormRecord,
) -> ValidationResult {
    let errors = registry
        .definitions_for(section)
        .iter()
        .filter_map(|definition| {
            validators::check(definition, record.get(definition.key))
                .err()
                .map(|message| (definition.key, message))
        })
        .collect();

    ValidationResult { section, errors }
}

pub fn validate_all(
    registry: &FieldRegistry,
    sections: &[Section],
    record: &FormRecord,
) -> Vec<ValidationResult> {
    sections
        .iter()
        .map(|section| validate_section(registry, *section, record))
        .collect()
}
