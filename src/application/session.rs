//! Session state machine
//!
//! An explicit value passed into and returned from every core operation;
//! there is no ambient logged-in flag. The enum encodes the invariant that
//! a role exists iff the session is authenticated. The machine is cyclic:
//! logout always returns to `LoggedOut`.

use crate::domain::{DomainError, DomainResult, User, UserRole};

/// Authentication state for one interactive user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    Student {
        user_id: i32,
    },
    Admin {
        user_id: i32,
    },
}

impl Session {
    /// The authenticated state for a verified user.
    pub fn for_user(user: &User) -> Self {
        match user.role {
            UserRole::Student => Self::Student { user_id: user.id },
            UserRole::Admin => Self::Admin { user_id: user.id },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::LoggedOut)
    }

    /// Role of the authenticated user, `None` when logged out.
    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::LoggedOut => None,
            Self::Student { .. } => Some(UserRole::Student),
            Self::Admin { .. } => Some(UserRole::Admin),
        }
    }

    /// Logout transition: valid from any state, always yields `LoggedOut`.
    pub fn logout(self) -> Self {
        Self::LoggedOut
    }

    /// Gate for student-only operations.
    pub(crate) fn require_student(&self) -> DomainResult<i32> {
        match self {
            Self::Student { user_id } => Ok(*user_id),
            _ => Err(DomainError::Unauthorized),
        }
    }

    /// Gate for admin-only operations.
    pub(crate) fn require_admin(&self) -> DomainResult<i32> {
        match self {
            Self::Admin { user_id } => Ok(*user_id),
            _ => Err(DomainError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: i32, role: UserRole) -> User {
        User {
            id,
            email: format!("u{}@example.com", id),
            password_hash: "$2b$12$unused".into(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn initial_state_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn login_then_logout_leaves_no_residual_role() {
        let session = Session::for_user(&user(7, UserRole::Student));
        assert_eq!(session.role(), Some(UserRole::Student));
        let session = session.logout();
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn role_matches_user() {
        assert_eq!(
            Session::for_user(&user(1, UserRole::Admin)),
            Session::Admin { user_id: 1 }
        );
        assert_eq!(
            Session::for_user(&user(2, UserRole::Student)),
            Session::Student { user_id: 2 }
        );
    }

    #[test]
    fn gates_reject_wrong_states() {
        assert!(matches!(
            Session::LoggedOut.require_student(),
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            Session::Admin { user_id: 1 }.require_student(),
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            Session::Student { user_id: 1 }.require_admin(),
            Err(DomainError::Unauthorized)
        ));
        assert_eq!(Session::Student { user_id: 9 }.require_student().unwrap(), 9);
        assert_eq!(Session::Admin { user_id: 4 }.require_admin().unwrap(), 4);
    }

    #[test]
    fn logout_is_valid_from_every_state() {
        assert_eq!(Session::LoggedOut.logout(), Session::LoggedOut);
        assert_eq!(Session::Student { user_id: 1 }.logout(), Session::LoggedOut);
        assert_eq!(Session::Admin { user_id: 1 }.logout(), Session::LoggedOut);
    }
}
