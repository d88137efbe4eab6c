use crate::core::field::{FieldDefinition, FieldKind};
use crate::core::value::Value;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("phone pattern compiles")
});

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks a single value against its definition.
///
/// Empty values only fail when the field is required; non-empty values go
/// through the kind-specific format check. At most one message is produced.
pub fn check(definition: &FieldDefinition, value: &Value) -> Result<(), ValidationError> {
    let label = definition.label();
    if value.is_empty() {
        return if definition.required {
            Err(format!("{label} is required"))
        } else {
            Ok(())
        };
    }

    match (definition.kind, value) {
        (FieldKind::File, Value::File(_)) => Ok(()),
        (FieldKind::File, _) => Err(format!("{label} must be a file")),
        (_, Value::File(_)) => Err(format!("{label} must be text")),
        (kind, Value::Text(text)) => check_text(label, kind, text.trim()),
        (_, Value::None) => Ok(()),
    }
}

fn check_text(label: &str, kind: FieldKind, text: &str) -> Result<(), ValidationError> {
    match kind {
        FieldKind::Text | FieldKind::File => Ok(()),
        FieldKind::Email => email(label, text),
        FieldKind::Phone => phone(label, text),
        FieldKind::Numeric => numeric(label, text),
        FieldKind::Date => date(label, text),
        FieldKind::Select(allowed) => one_of(label, allowed, text),
    }
}

pub fn email(label: &str, value: &str) -> Result<(), ValidationError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(format!("{label} must be a valid email address"))
    }
}

pub fn phone(label: &str, value: &str) -> Result<(), ValidationError> {
    if PHONE.is_match(value) {
        Ok(())
    } else {
        Err(format!("{label} must contain only digits"))
    }
}

pub fn numeric(label: &str, value: &str) -> Result<(), ValidationError> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(format!("{label} must be a number")),
    }
}

pub fn date(label: &str, value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| format!("{label} must be a valid date (YYYY-MM-DD)"))
}

pub fn one_of(label: &str, allowed: &[&str], value: &str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!("{label} must be one of: {}", allowed.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldKey;
    use crate::core::section::Section;
    use crate::core::value::FileRef;

    fn def(key: FieldKey, kind: FieldKind) -> FieldDefinition {
        FieldDefinition::new(key, Section::Contact, kind)
    }

    #[test]
    fn required_empty_reports_label() {
        let d = def(FieldKey::NidNumber, FieldKind::Text).required();
        assert_eq!(check(&d, &Value::None), Err("NID Number is required".into()));
        assert_eq!(
            check(&d, &Value::text("  ")),
            Err("NID Number is required".into())
        );
    }

    #[test]
    fn optional_empty_skips_format_checks() {
        let d = def(FieldKey::OfficePhone, FieldKind::Phone);
        assert_eq!(check(&d, &Value::None), Ok(()));
    }

    #[test]
    fn email_needs_at_and_domain() {
        assert!(email("Email", "a@b.gov").is_ok());
        assert!(email("Email", "a@b").is_err());
        assert!(email("Email", "ab.gov").is_err());
        assert!(email("Email", "@b.gov").is_err());
    }

    #[test]
    fn phone_is_digits_only() {
        assert!(phone("Personal Mobile", "01711000000").is_ok());
        assert_eq!(
            phone("Personal Mobile", "call me"),
            Err("Personal Mobile must contain only digits".into())
        );
        for rejected in ["017-11-00", "+880 1711-000000", "+1", "+"] {
            assert!(phone("Personal Mobile", rejected).is_err(), "{rejected}");
        }
    }

    #[test]
    fn phone_is_checked_after_trimming() {
        let d = def(FieldKey::PersonalMobile, FieldKind::Phone).required();
        assert_eq!(check(&d, &Value::text(" 01711000000 ")), Ok(()));
        assert_eq!(
            check(&d, &Value::text("017-11-00")),
            Err("Personal Mobile must contain only digits".into())
        );
    }

    #[test]
    fn numeric_and_date() {
        assert!(numeric("Year", "2021").is_ok());
        assert!(numeric("Year", "20x1").is_err());
        assert!(numeric("Year", "NaN").is_err());
        assert!(date("Date of Birth", "1990-02-28").is_ok());
        assert!(date("Date of Birth", "1990-02-30").is_err());
    }

    #[test]
    fn select_lists_allowed_values() {
        let d = def(FieldKey::Gender, FieldKind::Select(&["male", "female", "other"]));
        assert_eq!(
            check(&d, &Value::text("unknown")),
            Err("Gender must be one of: male, female, other".into())
        );
        assert_eq!(check(&d, &Value::text("other")), Ok(()));
    }

    #[test]
    fn file_fields_reject_text_and_text_fields_reject_files() {
        let photo = def(FieldKey::Photo, FieldKind::File);
        assert!(check(&photo, &Value::File(FileRef::new("me.jpg", 10))).is_ok());
        assert_eq!(
            check(&photo, &Value::text("me.jpg")),
            Err("Photo must be a file".into())
        );

        let name = def(FieldKey::FullName, FieldKind::Text);
        assert_eq!(
            check(&name, &Value::File(FileRef::new("me.jpg", 10))),
            Err("Full Name must be text".into())
        );
    }
}
