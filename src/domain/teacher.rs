use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{TeacherId, TeacherName, TypeConstraintError};

/// Account status of a teacher.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeacherStatus {
    Active,
    Suspended,
}

impl TeacherStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            TeacherStatus::Active => "Active",
            TeacherStatus::Suspended => "Suspended",
        }
    }
}

impl Display for TeacherStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeacherStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(TeacherStatus::Active),
            "suspended" => Ok(TeacherStatus::Suspended),
            _ => Err(TypeConstraintError::InvalidValue(s.to_string())),
        }
    }
}

/// One managed teacher account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: TeacherName,
    pub status: TeacherStatus,
    pub school: String,
    /// Free text, may hold several comma separated role labels.
    pub role: String,
    pub trackers: u32,
    pub assessments: u32,
    /// Display string only, never parsed.
    pub last_login: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Teacher {
    /// First letter of every word of the name, upper-cased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Individual role labels.
    pub fn roles(&self) -> Vec<&str> {
        self.role
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(name: &str, role: &str) -> Teacher {
        Teacher {
            id: TeacherId::new("1").unwrap(),
            name: TeacherName::new(name).unwrap(),
            status: TeacherStatus::Active,
            school: "MasteryConnect (4 Mastery Levels)".to_string(),
            role: role.to_string(),
            trackers: 0,
            assessments: 0,
            last_login: "May 06, 2024".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(teacher("Ms. Melanie Boyes", "Teacher").initials(), "MMB");
        assert_eq!(teacher("dr. amanda garcia", "Teacher").initials(), "DAG");
    }

    #[test]
    fn roles_split_comma_combined_labels() {
        let t = teacher(
            "Ms. Domonique Jones Goode",
            "Benchmark Facilitator, Limited District Admin",
        );
        assert_eq!(
            t.roles(),
            vec!["Benchmark Facilitator", "Limited District Admin"]
        );
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("suspended".parse(), Ok(TeacherStatus::Suspended));
        assert_eq!("Active".parse(), Ok(TeacherStatus::Active));
        assert!("retired".parse::<TeacherStatus>().is_err());
    }
}
