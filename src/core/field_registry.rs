use crate::core::field::{FieldDefinition, FieldKey, FieldKind};
use crate::core::section::Section;
use indexmap::IndexMap;

const GENDERS: &[&str] = &["male", "female", "other"];
const DISTRICTS: &[&str] = &["dhaka", "chittagong", "sylhet"];
const DIVISIONS: &[&str] = &["general-admin", "finance", "ict"];
const DESIGNATIONS: &[&str] = &["officer", "senior-officer", "deputy-secretary"];
const MINISTRIES: &[&str] = &["finance", "education", "health", "ict"];
const SERVICE_TYPES: &[&str] = &["permanent", "contract", "deputation"];
const TRAINING_TYPES: &[&str] = &["domestic", "foreign", "research"];
const YES_NO: &[&str] = &["yes", "no"];

const EMPLOYEE_FIELDS: &[FieldDefinition] = {
    use FieldKey::*;
    use FieldKind as K;
    use Section::*;
    &[
        FieldDefinition::new(EmployeeId, Basic, K::Text).required(),
        FieldDefinition::new(FullName, Basic, K::Text).required(),
        FieldDefinition::new(FathersName, Basic, K::Text),
        FieldDefinition::new(MothersName, Basic, K::Text),
        FieldDefinition::new(Dob, Basic, K::Date).required(),
        FieldDefinition::new(Gender, Basic, K::Select(GENDERS)).required(),
        FieldDefinition::new(Photo, Basic, K::File),
        FieldDefinition::new(PresentAddress, Address, K::Text).required(),
        FieldDefinition::new(PermanentAddress, Address, K::Text).required(),
        FieldDefinition::new(District, Address, K::Select(DISTRICTS)).required(),
        FieldDefinition::new(Division, Address, K::Select(DIVISIONS)).required(),
        FieldDefinition::new(CurrentPosition, Professional, K::Text).required(),
        FieldDefinition::new(Designation, Professional, K::Select(DESIGNATIONS)).required(),
        FieldDefinition::new(Ministry, Professional, K::Select(MINISTRIES)).required(),
        FieldDefinition::new(DepartmentDivision, Professional, K::Text),
        FieldDefinition::new(OfficeName, Professional, K::Text),
        FieldDefinition::new(JoiningDate, Professional, K::Date).required(),
        FieldDefinition::new(ServiceType, Professional, K::Select(SERVICE_TYPES)),
        FieldDefinition::new(OfficePhone, Contact, K::Phone),
        FieldDefinition::new(PersonalMobile, Contact, K::Phone).required(),
        FieldDefinition::new(EmergencyContact, Contact, K::Phone).required(),
        FieldDefinition::new(FieldKey::Email, Contact, K::Email).required(),
        FieldDefinition::new(NidNumber, Contact, K::Text).required(),
        FieldDefinition::new(PassportNumber, Contact, K::Text),
        FieldDefinition::new(TrainingType, Training, K::Select(TRAINING_TYPES)),
        FieldDefinition::new(Year, Training, K::Numeric),
        FieldDefinition::new(ProviderInstitute, Training, K::Text),
        FieldDefinition::new(Duration, Training, K::Text),
        FieldDefinition::new(Completed, Training, K::Select(YES_NO)),
        FieldDefinition::new(Certification, Training, K::Select(YES_NO)),
    ]
};

/// Read-only lookup of field definitions, grouped by section.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: IndexMap<FieldKey, FieldDefinition>,
    by_section: IndexMap<Section, Vec<FieldDefinition>>,
}

impl FieldRegistry {
    pub fn new(definitions: impl IntoIterator<Item = FieldDefinition>) -> Self {
        let mut fields = IndexMap::<FieldKey, FieldDefinition>::new();
        for definition in definitions {
            if fields.insert(definition.key, definition).is_some() {
                tracing::warn!(field = %definition.key, "duplicate field definition, keeping the last one");
            }
        }

        let mut by_section = IndexMap::<Section, Vec<FieldDefinition>>::new();
        for section in Section::ALL {
            let defs: Vec<_> = fields
                .values()
                .filter(|definition| definition.section == section)
                .copied()
                .collect();
            if !defs.is_empty() {
                by_section.insert(section, defs);
            }
        }

        Self { fields, by_section }
    }

    /// The employee registration form as the portal ships it.
    pub fn employee() -> Self {
        Self::new(EMPLOYEE_FIELDS.iter().copied())
    }

    pub fn definitions_for(&self, section: Section) -> &[FieldDefinition] {
        self.by_section
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn definition(&self, key: FieldKey) -> Option<&FieldDefinition> {
        self.fields.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.contains_key(&key)
    }

    /// Sections owning at least one field, in wizard order.
    pub fn sections(&self) -> Vec<Section> {
        self.by_section.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::employee()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_registry_covers_every_key_once() {
        let registry = FieldRegistry::employee();
        assert_eq!(registry.len(), FieldKey::ALL.len());
        assert_eq!(registry.sections(), Section::ALL.to_vec());
    }

    #[test]
    fn required_fields_per_section() {
        let registry = FieldRegistry::employee();
        let required = |section| {
            registry
                .definitions_for(section)
                .iter()
                .filter(|d| d.required)
                .map(|d| d.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            required(Section::Basic),
            vec![FieldKey::EmployeeId, FieldKey::FullName, FieldKey::Dob, FieldKey::Gender]
        );
        assert_eq!(
            required(Section::Contact),
            vec![
                FieldKey::PersonalMobile,
                FieldKey::EmergencyContact,
                FieldKey::Email,
                FieldKey::NidNumber
            ]
        );
        assert!(required(Section::Training).is_empty());
    }

    #[test]
    fn narrow_registry_skips_empty_sections() {
        let registry = FieldRegistry::new([
            FieldDefinition::new(FieldKey::EmployeeId, Section::Basic, FieldKind::Text).required(),
            FieldDefinition::new(FieldKey::PresentAddress, Section::Address, FieldKind::Text),
        ]);
        assert_eq!(registry.sections(), vec![Section::Basic, Section::Address]);
        assert!(registry.definitions_for(Section::Training).is_empty());
        assert!(registry.definition(FieldKey::Email).is_none());
    }

    #[test]
    fn duplicate_definition_keeps_last() {
        let registry = FieldRegistry::new([
            FieldDefinition::new(FieldKey::Year, Section::Training, FieldKind::Text),
            FieldDefinition::new(FieldKey::Year, Section::Training, FieldKind::Numeric),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.definition(FieldKey::Year).map(|d| d.kind),
            Some(FieldKind::Numeric)
        );
    }
}
