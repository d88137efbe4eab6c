#![allow(dead_code)]

use staff_intake::core::{FieldKey, Value};
use staff_intake::state::{FormRecord, Wizard};

pub fn complete_record() -> FormRecord {
    use FieldKey::*;
    [
        (EmployeeId, "E-2041"),
        (FullName, "Tanvir Hasan"),
        (Dob, "1988-11-02"),
        (Gender, "male"),
        (PresentAddress, "Flat 4B, Mirpur 10"),
        (PermanentAddress, "Sadar, Sylhet"),
        (District, "sylhet"),
        (Division, "finance"),
        (CurrentPosition, "Accounts Officer"),
        (Designation, "senior-officer"),
        (Ministry, "finance"),
        (JoiningDate, "2012-01-15"),
        (PersonalMobile, "01911000000"),
        (EmergencyContact, "01611000000"),
        (Email, "tanvir@eduadmin.gov"),
        (NidNumber, "8812345678901"),
        (Year, "2019"),
    ]
    .into_iter()
    .map(|(key, text)| (key, Value::text(text)))
    .collect()
}

pub fn fill_current(wizard: &mut Wizard, source: &FormRecord) {
    let keys: Vec<_> = wizard
        .registry()
        .definitions_for(wizard.current_section())
        .iter()
        .map(|d| d.key)
        .collect();
    for key in keys {
        wizard.set_value(key, source.get(key).clone());
    }
}
