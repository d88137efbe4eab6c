use crate::core::field::FieldKey;
use crate::core::field_registry::FieldRegistry;
use crate::core::section::Section;
use crate::core::value::Value;
use crate::state::record::FormRecord;
use crate::state::validation::{ValidationResult, validate_section};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: Section, to: Section },
    Stayed(Section),
}

impl Navigation {
    pub fn section(self) -> Section {
        match self {
            Self::Moved { to, .. } => to,
            Self::Stayed(section) => section,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("a wizard needs at least one section")]
    NoSections,
    #[error("section `{0}` appears more than once")]
    DuplicateSection(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JumpRejected {
    #[error("section `{0}` is not part of this wizard")]
    NotInWizard(Section),
    #[error("cannot jump ahead to `{target}` from `{current}`")]
    OutOfReach { target: Section, current: Section },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current section.
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        self.position as f64 / self.total.max(1) as f64
    }

    pub fn percent(&self) -> f64 {
        (self.position * 100) as f64 / self.total.max(1) as f64
    }
}

/// Multi-section registration flow.
///
/// Forward motion is gated on the current section validating; backward motion
/// is free. Jumps may land on any visited section or the one right after the
/// current position.
#[derive(Debug, Clone)]
pub struct Wizard {
    registry: Arc<FieldRegistry>,
    sections: Vec<Section>,
    current: usize,
    completed: BTreeSet<Section>,
    visited: BTreeSet<Section>,
    record: FormRecord,
    surfaced: Option<ValidationResult>,
}

impl Wizard {
    pub fn new(registry: Arc<FieldRegistry>) -> Result<Self, WizardError> {
        let sections = registry.sections();
        Self::with_sections(registry, sections)
    }

    pub fn with_sections(
        registry: Arc<FieldRegistry>,
        sections: Vec<Section>,
    ) -> Result<Self, WizardError> {
        check_sections(&sections)?;
        let visited = BTreeSet::from([sections[0]]);
        Ok(Self {
            registry,
            sections,
            current: 0,
            completed: BTreeSet::new(),
            visited,
            record: FormRecord::new(),
            surfaced: None,
        })
    }

    pub(crate) fn restore(
        registry: Arc<FieldRegistry>,
        sections: Vec<Section>,
        current: usize,
        completed: BTreeSet<Section>,
        visited: BTreeSet<Section>,
        record: FormRecord,
    ) -> Result<Self, WizardError> {
        let mut wizard = Self::with_sections(registry, sections)?;
        wizard.current = current.min(wizard.sections.len() - 1);
        wizard.completed = completed
            .into_iter()
            .filter(|section| wizard.sections.contains(section))
            .collect();
        wizard.visited.extend(
            visited
                .into_iter()
                .filter(|section| wizard.sections.contains(section)),
        );
        wizard.visited.insert(wizard.sections[wizard.current]);
        wizard.record = record;
        Ok(wizard)
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> Section {
        self.sections[self.current]
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.sections.len()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn completed(&self) -> &BTreeSet<Section> {
        &self.completed
    }

    pub fn visited(&self) -> &BTreeSet<Section> {
        &self.visited
    }

    pub fn status_at(&self, index: usize) -> SectionStatus {
        match self.sections.get(index) {
            Some(_) if index == self.current => SectionStatus::Active,
            Some(section) if self.completed.contains(section) => SectionStatus::Done,
            _ => SectionStatus::Pending,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current + 1,
            total: self.sections.len(),
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Errors from the last refused `request_next`, minus fields edited since.
    pub fn errors(&self) -> Option<&ValidationResult> {
        self.surfaced.as_ref()
    }

    pub fn set_value(&mut self, key: FieldKey, value: impl Into<Value>) {
        if !self.registry.contains(key) {
            tracing::debug!(field = %key, "value set for a field outside the registry");
        }
        self.record.set(key, value);
        if let Some(result) = self.surfaced.as_mut() {
            result.clear_error(key);
        }
    }

    pub fn validate_current(&self) -> ValidationResult {
        validate_section(&self.registry, self.current_section(), &self.record)
    }

    pub fn request_next(&mut self) -> Result<Navigation, ValidationResult> {
        let from = self.current_section();
        let result = self.validate_current();
        if !result.is_valid() {
            tracing::debug!(section = %from, errors = result.errors.len(), "next refused");
            self.surfaced = Some(result.clone());
            return Err(result);
        }

        self.surfaced = None;
        self.completed.insert(from);
        if !self.has_next() {
            return Ok(Navigation::Stayed(from));
        }
        self.current += 1;
        let to = self.current_section();
        self.visited.insert(to);
        tracing::debug!(%from, %to, "advanced");
        Ok(Navigation::Moved { from, to })
    }

    pub fn request_previous(&mut self) -> Navigation {
        let from = self.current_section();
        if self.current == 0 {
            return Navigation::Stayed(from);
        }
        self.current -= 1;
        let to = self.current_section();
        tracing::debug!(%from, %to, "went back");
        Navigation::Moved { from, to }
    }

    pub fn is_reachable(&self, section: Section) -> bool {
        self.index_of(section)
            .is_some_and(|index| index <= self.current + 1 || self.visited.contains(&section))
    }

    pub fn jump_to(&mut self, section: Section) -> Result<Navigation, JumpRejected> {
        let from = self.current_section();
        let Some(index) = self.index_of(section) else {
            tracing::warn!(target_section = %section, "jump to a section outside the wizard");
            return Err(JumpRejected::NotInWizard(section));
        };
        if !self.is_reachable(section) {
            tracing::warn!(%from, target_section = %section, "jump rejected");
            return Err(JumpRejected::OutOfReach {
                target: section,
                current: from,
            });
        }
        if index == self.current {
            return Ok(Navigation::Stayed(from));
        }
        self.current = index;
        self.visited.insert(section);
        tracing::debug!(%from, to = %section, "jumped");
        Ok(Navigation::Moved { from, to: section })
    }

    /// Drops every value and returns to the first section.
    pub fn reset(&mut self) {
        self.current = 0;
        self.completed.clear();
        self.visited = BTreeSet::from([self.sections[0]]);
        self.record.clear();
        self.surfaced = None;
    }

    pub(crate) fn surface(&mut self, result: ValidationResult) {
        self.surfaced = Some(result);
    }

    fn index_of(&self, section: Section) -> Option<usize> {
        self.sections.iter().position(|s| *s == section)
    }
}

fn check_sections(sections: &[Section]) -> Result<(), WizardError> {
    if sections.is_empty() {
        return Err(WizardError::NoSections);
    }
    let mut seen = BTreeSet::new();
    for section in sections {
        if !seen.insert(*section) {
            return Err(WizardError::DuplicateSection(*section));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{complete_record, fill_section};

    fn wizard() -> Wizard {
        Wizard::new(Arc::new(FieldRegistry::employee())).expect("wizard")
    }

    #[test]
    fn starts_on_first_section_with_nothing_completed() {
        let w = wizard();
        assert_eq!(w.current_section(), Section::Basic);
        assert!(w.completed().is_empty());
        assert_eq!(w.progress().position, 1);
        assert_eq!(w.progress().percent(), 20.0);
        assert_eq!(w.status_at(0), SectionStatus::Active);
        assert_eq!(w.status_at(1), SectionStatus::Pending);
    }

    #[test]
    fn rejects_empty_and_duplicate_sections() {
        let registry = Arc::new(FieldRegistry::employee());
        assert_eq!(
            Wizard::with_sections(registry.clone(), vec![]).err(),
            Some(WizardError::NoSections)
        );
        assert_eq!(
            Wizard::with_sections(registry, vec![Section::Basic, Section::Basic]).err(),
            Some(WizardError::DuplicateSection(Section::Basic))
        );
    }

    #[test]
    fn refused_next_is_stable() {
        let mut w = wizard();
        let first = w.request_next().expect_err("basic is empty");
        let second = w.request_next().expect_err("still empty");
        assert_eq!(first, second);
        assert_eq!(w.current_index(), 0);
        assert!(w.completed().is_empty());
        assert_eq!(w.errors(), Some(&first));
    }

    #[test]
    fn previous_from_start_is_noop() {
        let mut w = wizard();
        assert_eq!(w.request_previous(), Navigation::Stayed(Section::Basic));
        assert_eq!(w.current_index(), 0);
    }

    #[test]
    fn walking_every_section_completes_all() {
        let mut w = wizard();
        let record = complete_record();
        for _ in 0..w.len() {
            fill_section(&mut w, &record);
            w.request_next().expect("section valid");
        }
        assert_eq!(w.current_index(), w.len() - 1);
        assert_eq!(w.completed().len(), w.len());
        assert_eq!(w.progress().percent(), 100.0);
        assert_eq!(w.request_next(), Ok(Navigation::Stayed(Section::Training)));
    }

    #[test]
    fn editing_a_field_clears_its_surfaced_error() {
        let mut w = wizard();
        let _ = w.request_next();
        assert!(w.errors().and_then(|e| e.error(FieldKey::FullName)).is_some());

        w.set_value(FieldKey::FullName, "A");
        let errors = w.errors().expect("still surfaced");
        assert!(errors.error(FieldKey::FullName).is_none());
        assert!(errors.error(FieldKey::EmployeeId).is_some());
    }

    #[test]
    fn going_back_keeps_surfaced_errors_and_does_not_validate() {
        let mut w = wizard();
        fill_section(&mut w, &complete_record());
        w.request_next().expect("basic valid");
        let refused = w.request_next().expect_err("address empty");

        assert_eq!(
            w.request_previous(),
            Navigation::Moved {
                from: Section::Address,
                to: Section::Basic
            }
        );
        assert_eq!(w.errors(), Some(&refused));
    }

    #[test]
    fn jump_reaches_visited_and_adjacent_only() {
        let mut w = wizard();
        assert_eq!(
            w.jump_to(Section::Professional),
            Err(JumpRejected::OutOfReach {
                target: Section::Professional,
                current: Section::Basic
            })
        );
        assert_eq!(w.current_index(), 0);

        assert!(w.jump_to(Section::Address).is_ok());
        assert_eq!(w.current_section(), Section::Address);
        assert!(w.completed().is_empty());

        assert!(w.jump_to(Section::Professional).is_ok());
        assert!(w.jump_to(Section::Basic).is_ok());
        assert!(w.jump_to(Section::Professional).is_ok(), "visited before");
        assert!(w.jump_to(Section::Training).is_err());
    }

    #[test]
    fn jump_outside_wizard_is_rejected() {
        let registry = Arc::new(FieldRegistry::employee());
        let mut w =
            Wizard::with_sections(registry, vec![Section::Basic, Section::Address]).expect("wizard");
        assert_eq!(
            w.jump_to(Section::Training),
            Err(JumpRejected::NotInWizard(Section::Training))
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut w = wizard();
        fill_section(&mut w, &complete_record());
        w.request_next().expect("valid");
        w.reset();
        assert_eq!(w.current_index(), 0);
        assert!(w.record().is_empty());
        assert!(w.completed().is_empty());
        assert!(w.errors().is_none());
    }
}
