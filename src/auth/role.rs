use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    HrOfficer,
    TrainingCoordinator,
    EducationCoordinator,
    ResearchCoordinator,
    #[serde(rename = "approver_level_1")]
    ApproverLevel1,
    #[serde(rename = "approver_level_2")]
    ApproverLevel2,
    Employee,
    Auditor,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::SuperAdmin,
        Role::HrOfficer,
        Role::TrainingCoordinator,
        Role::EducationCoordinator,
        Role::ResearchCoordinator,
        Role::ApproverLevel1,
        Role::ApproverLevel2,
        Role::Employee,
        Role::Auditor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::HrOfficer => "hr_officer",
            Self::TrainingCoordinator => "training_coordinator",
            Self::EducationCoordinator => "education_coordinator",
            Self::ResearchCoordinator => "research_coordinator",
            Self::ApproverLevel1 => "approver_level_1",
            Self::ApproverLevel2 => "approver_level_2",
            Self::Employee => "employee",
            Self::Auditor => "auditor",
        }
    }

    /// Roles that see the administration menu.
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            Self::SuperAdmin
                | Self::HrOfficer
                | Self::TrainingCoordinator
                | Self::EducationCoordinator
                | Self::ResearchCoordinator
        )
    }

    pub fn designation(self) -> String {
        self.id().replace('_', " ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.id() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn serde_matches_ids() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).expect("serialize");
            assert_eq!(json, format!("\"{}\"", role.id()));
            assert_eq!(role.id().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn designation_spells_out_id() {
        assert_eq!(Role::ApproverLevel1.designation(), "approver level 1");
        assert!(Role::HrOfficer.is_admin());
        assert!(!Role::Auditor.is_admin());
    }
}
