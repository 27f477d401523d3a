//! Per-record actions offered on a teacher card.

use std::fmt::Display;
use std::str::FromStr;

use crate::domain::teacher::TeacherStatus;
use crate::domain::types::TypeConstraintError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeacherAction {
    Login,
    Edit,
    Suspend,
    Unsuspend,
    Delete,
    ResetPassword,
}

impl TeacherAction {
    pub const ALL: [TeacherAction; 6] = [
        TeacherAction::Login,
        TeacherAction::Edit,
        TeacherAction::Suspend,
        TeacherAction::Unsuspend,
        TeacherAction::Delete,
        TeacherAction::ResetPassword,
    ];

    /// Path segment used by the action routes.
    pub const fn slug(self) -> &'static str {
        match self {
            TeacherAction::Login => "login",
            TeacherAction::Edit => "edit",
            TeacherAction::Suspend => "suspend",
            TeacherAction::Unsuspend => "unsuspend",
            TeacherAction::Delete => "delete",
            TeacherAction::ResetPassword => "reset-password",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TeacherAction::Login => "Login",
            TeacherAction::Edit => "Edit",
            TeacherAction::Suspend => "Suspend",
            TeacherAction::Unsuspend => "Unsuspend",
            TeacherAction::Delete => "Delete",
            TeacherAction::ResetPassword => "Reset Password",
        }
    }

    /// Suspend applies to active accounts only, unsuspend to suspended ones.
    pub fn is_available_for(self, status: TeacherStatus) -> bool {
        match self {
            TeacherAction::Suspend => status == TeacherStatus::Active,
            TeacherAction::Unsuspend => status == TeacherStatus::Suspended,
            _ => true,
        }
    }
}

impl Display for TeacherAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TeacherAction {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeacherAction::ALL
            .into_iter()
            .find(|action| action.slug() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}
