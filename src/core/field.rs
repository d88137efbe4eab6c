use crate::core::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! field_keys {
    ($($variant:ident => $id:tt, $label:tt;)+) => {
        /// Every input of the registration form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum FieldKey {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl FieldKey {
            pub const ALL: &'static [FieldKey] = &[$(FieldKey::$variant),+];

            pub fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

field_keys! {
    EmployeeId => "employeeId", "Employee ID";
    FullName => "fullName", "Full Name";
    FathersName => "fathersName", "Father's Name";
    MothersName => "mothersName", "Mother's Name";
    Dob => "dob", "Date of Birth";
    Gender => "gender", "Gender";
    Photo => "photo", "Photo";
    PresentAddress => "presentAddress", "Present Address";
    PermanentAddress => "permanentAddress", "Permanent Address";
    District => "district", "District";
    Division => "division", "Division";
    CurrentPosition => "currentPosition", "Current Position";
    Designation => "designation", "Designation";
    Ministry => "ministry", "Ministry";
    DepartmentDivision => "departmentDivision", "Department/Division";
    OfficeName => "officeName", "Office Name";
    JoiningDate => "joiningDate", "Joining Date";
    ServiceType => "serviceType", "Service Type";
    OfficePhone => "officePhone", "Office Phone";
    PersonalMobile => "personalMobile", "Personal Mobile";
    EmergencyContact => "emergencyContact", "Emergency Contact";
    Email => "email", "Email";
    NidNumber => "nidNumber", "NID Number";
    PassportNumber => "passportNumber", "Passport Number";
    TrainingType => "trainingType", "Training Type";
    Year => "year", "Year";
    ProviderInstitute => "providerInstitute", "Provider/Institute";
    Duration => "duration", "Duration";
    Completed => "completed", "Completed";
    Certification => "certification", "Certification";
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .iter()
            .copied()
            .find(|key| key.id() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Email,
    Phone,
    Numeric,
    Select(&'static [&'static str]),
    File,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Numeric => "numeric",
            Self::Select(_) => "select",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub key: FieldKey,
    pub section: Section,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub const fn new(key: FieldKey, section: Section, kind: FieldKind) -> Self {
        Self {
            key,
            section,
            required: false,
            kind,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    /// Allowed values for select fields, empty for every other kind.
    pub fn enum_values(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Select(values) => values,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldDefinition, FieldKey, FieldKind};
    use crate::core::section::Section;

    #[test]
    fn ids_round_trip_through_from_str() {
        for key in FieldKey::ALL {
            assert_eq!(key.id().parse::<FieldKey>(), Ok(*key));
        }
        assert!("line1".parse::<FieldKey>().is_err());
    }

    #[test]
    fn enum_values_only_for_select() {
        let gender = FieldDefinition::new(
            FieldKey::Gender,
            Section::Basic,
            FieldKind::Select(&["male", "female"]),
        );
        assert_eq!(gender.enum_values(), &["male", "female"]);

        let name = FieldDefinition::new(FieldKey::FullName, Section::Basic, FieldKind::Text);
        assert!(name.enum_values().is_empty());
        assert!(!name.required);
        assert!(name.required().required);
    }
}
