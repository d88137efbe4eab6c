use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One page of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basic,
    Address,
    Professional,
    Contact,
    Training,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Basic,
        Section::Address,
        Section::Professional,
        Section::Contact,
        Section::Training,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Address => "address",
            Self::Professional => "professional",
            Self::Contact => "contact",
            Self::Training => "training",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Identification",
            Self::Address => "Address Details",
            Self::Professional => "Professional Placement",
            Self::Contact => "Contact & Identity",
            Self::Training => "Training & Research History",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn parse_accepts_ids_only() {
        assert_eq!("contact".parse::<Section>(), Ok(Section::Contact));
        assert!("Contact & Identity".parse::<Section>().is_err());
    }

    #[test]
    fn serde_uses_section_id() {
        let json = serde_json::to_string(&Section::Professional).expect("serialize");
        assert_eq!(json, "\"professional\"");
    }
}
