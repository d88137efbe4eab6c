use crate::auth::page::Page;
use crate::auth::role::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter email and password")]
    MissingCredentials,
}

/// Who is using the portal. Passed explicitly to whatever needs identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Mock login: any non-blank credentials are accepted for the chosen role.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<&User, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: format!("user_{}", Utc::now().timestamp_millis()),
            email: email.to_string(),
            name,
            role,
            department: Some("Administration".to_string()),
            designation: Some(role.designation()),
        };
        tracing::info!(email = %user.email, %role, "logged in");
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn can_access(&self, page: Page) -> bool {
        self.current_role().is_some_and(|role| page.visible_for(role))
    }

    pub fn to_json(&self) -> Option<String> {
        self.user
            .as_ref()
            .and_then(|user| serde_json::to_string(user).ok())
    }

    /// Restores a stored session; unreadable data yields an anonymous one.
    pub fn restore(stored: Option<&str>) -> Self {
        let Some(raw) = stored else {
            return Self::anonymous();
        };
        match serde_json::from_str::<User>(raw) {
            Ok(user) => Self::for_user(user),
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse stored user");
                Self::anonymous()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_credentials() {
        let mut session = Session::anonymous();
        assert_eq!(
            session.login("", "demo", Role::Employee).err(),
            Some(AuthError::MissingCredentials)
        );
        assert_eq!(
            session.login("hr@eduadmin.gov", "", Role::HrOfficer).err(),
            Some(AuthError::MissingCredentials)
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_derives_profile_from_email_and_role() {
        let mut session = Session::anonymous();
        let user = session
            .login("hr@eduadmin.gov", "demo", Role::HrOfficer)
            .expect("login")
            .clone();
        assert_eq!(user.name, "hr");
        assert!(user.id.starts_with("user_"));
        assert_eq!(user.designation.as_deref(), Some("hr officer"));
        assert_eq!(session.current_role(), Some(Role::HrOfficer));
        assert!(session.can_access(Page::UserManagement));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(!session.can_access(Page::Home));
    }

    #[test]
    fn restore_round_trips_and_tolerates_garbage() {
        let mut session = Session::anonymous();
        session
            .login("auditor@eduadmin.gov", "demo", Role::Auditor)
            .expect("login");
        let stored = session.to_json();
        assert_eq!(Session::restore(stored.as_deref()), session);

        assert!(!Session::restore(Some("{not json")).is_authenticated());
        assert!(!Session::restore(None).is_authenticated());
    }
}
