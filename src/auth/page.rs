use crate::auth::role::Role;

/// Portal routes reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    EmployeeEntry,
    EmployeeList,
    EmployeeSearch,
    TrainingStatus,
    UpcomingTraining,
    ResearchHistory,
    MyApplications,
    UserManagement,
    SystemConfiguration,
    MasterData,
    ApprovalQueue,
    Reports,
    AuditLogs,
    Help,
}

impl Page {
    pub const ALL: [Page; 15] = [
        Page::Home,
        Page::EmployeeEntry,
        Page::EmployeeList,
        Page::EmployeeSearch,
        Page::TrainingStatus,
        Page::UpcomingTraining,
        Page::ResearchHistory,
        Page::MyApplications,
        Page::UserManagement,
        Page::SystemConfiguration,
        Page::MasterData,
        Page::ApprovalQueue,
        Page::Reports,
        Page::AuditLogs,
        Page::Help,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::EmployeeEntry => "/employee-entry",
            Self::EmployeeList => "/employee-list",
            Self::EmployeeSearch => "/employee-search",
            Self::TrainingStatus => "/training-status",
            Self::UpcomingTraining => "/upcoming-training",
            Self::ResearchHistory => "/research-history",
            Self::MyApplications => "/my-applications",
            Self::UserManagement => "/user-management",
            Self::SystemConfiguration => "/system-configuration",
            Self::MasterData => "/master-data",
            Self::ApprovalQueue => "/approval-queue",
            Self::Reports => "/reports",
            Self::AuditLogs => "/audit-logs",
            Self::Help => "/help",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn is_admin_only(self) -> bool {
        matches!(
            self,
            Self::UserManagement | Self::SystemConfiguration | Self::MasterData | Self::ApprovalQueue
        )
    }

    pub fn visible_for(self, role: Role) -> bool {
        match self {
            Self::MyApplications => role == Role::Employee,
            page if page.is_admin_only() => role.is_admin(),
            _ => true,
        }
    }
}
