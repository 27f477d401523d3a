//! Filter engine deriving the visible teacher set from a [`TeacherFilter`].
//!
//! Each [`FilterField`] may have a predicate registered for it. A teacher is
//! kept when every registered predicate whose field holds an active criterion
//! accepts it. Fields without a predicate are accepted and have no effect.

use std::collections::HashMap;

use crate::domain::filter::{FilterField, TeacherFilter};
use crate::domain::teacher::Teacher;

/// Tests one teacher against the criterion value of a field.
pub type Predicate = fn(&Teacher, &str) -> bool;

/// Case-insensitive substring match against the display name.
pub fn name_contains(teacher: &Teacher, term: &str) -> bool {
    teacher
        .name
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Case-insensitive exact match against the account status.
pub fn status_is(teacher: &Teacher, status: &str) -> bool {
    teacher.status.as_str().to_lowercase() == status.to_lowercase()
}

#[derive(Clone, Debug)]
pub struct FilterEngine {
    predicates: HashMap<FilterField, Predicate>,
}

impl Default for FilterEngine {
    /// Search by name and status; the remaining selectors are not wired.
    fn default() -> Self {
        Self::empty()
            .with(FilterField::Search, name_contains)
            .with(FilterField::Status, status_is)
    }
}

impl FilterEngine {
    /// An engine that keeps every record.
    pub fn empty() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: FilterField, predicate: Predicate) -> Self {
        self.register(field, predicate);
        self
    }

    /// Registers `predicate` for `field`, returning the one it replaces.
    pub fn register(&mut self, field: FilterField, predicate: Predicate) -> Option<Predicate> {
        self.predicates.insert(field, predicate)
    }

    pub fn is_wired(&self, field: FilterField) -> bool {
        self.predicates.contains_key(&field)
    }

    pub fn matches(&self, teacher: &Teacher, filter: &TeacherFilter) -> bool {
        FilterField::ALL.iter().all(|field| {
            match (filter.criterion(*field), self.predicates.get(field)) {
                (Some(value), Some(predicate)) => predicate(teacher, value),
                _ => true,
            }
        })
    }

    /// Teachers passing every active criterion, in their original order.
    pub fn apply(&self, teachers: &[Teacher], filter: &TeacherFilter) -> Vec<Teacher> {
        teachers
            .iter()
            .filter(|teacher| self.matches(teacher, filter))
            .cloned()
            .collect()
    }
}

/// Filters with the default engine.
pub fn apply(teachers: &[Teacher], filter: &TeacherFilter) -> Vec<Teacher> {
    FilterEngine::default().apply(teachers, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::Selector;
    use crate::domain::teacher::TeacherStatus;
    use crate::domain::types::{TeacherId, TeacherName};

    fn teacher(id: &str, name: &str, status: TeacherStatus, role: &str) -> Teacher {
        Teacher {
            id: TeacherId::new(id).unwrap(),
            name: TeacherName::new(name).unwrap(),
            status,
            school: "PS_Middle_School (4 Mastery Levels)".to_string(),
            role: role.to_string(),
            trackers: 1,
            assessments: 1,
            last_login: "October 15, 2024".to_string(),
            avatar: None,
        }
    }

    fn sample() -> Vec<Teacher> {
        vec![
            teacher("1", "Ms. Melanie Boyes", TeacherStatus::Active, "School Administrator"),
            teacher("2", "Miss Genevieve Howe", TeacherStatus::Suspended, "School Administrator"),
            teacher("4", "Multischool Middle", TeacherStatus::Active, "Teacher"),
            teacher("6", "Dr. Sarah Johnson", TeacherStatus::Active, "Teacher"),
            teacher("9", "Dr. Michael Thompson", TeacherStatus::Suspended, "Principal"),
        ]
    }

    fn ids(teachers: &[Teacher]) -> Vec<&str> {
        teachers.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let teachers = sample();
        assert_eq!(apply(&teachers, &TeacherFilter::default()), teachers);
    }

    #[test]
    fn search_is_case_insensitive_substring_of_name() {
        let filter = TeacherFilter::default().with_search("MS.");
        assert_eq!(ids(&apply(&sample(), &filter)), vec!["1"]);

        // "multischool middle" holds no literal "ms." substring.
        let filter = TeacherFilter::default().with_search("mul");
        assert_eq!(ids(&apply(&sample(), &filter)), vec!["4"]);
    }

    #[test]
    fn search_ignores_other_fields() {
        let filter = TeacherFilter::default().with_search("principal");
        assert!(apply(&sample(), &filter).is_empty());
    }

    #[test]
    fn status_filter_is_exact() {
        let filter = TeacherFilter::default().with_status(Selector::parse("suspended"));
        assert_eq!(ids(&apply(&sample(), &filter)), vec!["2", "9"]);

        let filter = TeacherFilter::default().with_status(Selector::parse("Active"));
        assert_eq!(ids(&apply(&sample(), &filter)), vec!["1", "4", "6"]);

        let filter = TeacherFilter::default().with_status(Selector::parse("act"));
        assert!(apply(&sample(), &filter).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = TeacherFilter::default()
            .with_search("dr.")
            .with_status(Selector::parse("suspended"));
        assert_eq!(ids(&apply(&sample(), &filter)), vec!["9"]);
    }

    #[test]
    fn unwired_selectors_have_no_effect() {
        let filter = TeacherFilter::default()
            .with_school(Selector::parse("ps-middle"))
            .with_grade_level(Selector::parse("high"))
            .with_subject(Selector::parse("math"))
            .with_role(Selector::parse("facilitator"))
            .with_allow_tracker_creation(false);
        assert_eq!(apply(&sample(), &filter), sample());
    }

    #[test]
    fn registered_predicate_takes_effect() {
        fn role_contains(teacher: &Teacher, role: &str) -> bool {
            teacher
                .roles()
                .iter()
                .any(|r| r.eq_ignore_ascii_case(role))
        }

        let engine = FilterEngine::default().with(FilterField::Role, role_contains);
        assert!(engine.is_wired(FilterField::Role));
        assert!(!FilterEngine::default().is_wired(FilterField::Role));

        let filter = TeacherFilter::default().with_role(Selector::parse("teacher"));
        assert_eq!(ids(&engine.apply(&sample(), &filter)), vec!["4", "6"]);
    }

    #[test]
    fn empty_engine_keeps_everything() {
        let filter = TeacherFilter::default().with_search("zzz");
        assert_eq!(FilterEngine::empty().apply(&sample(), &filter), sample());
    }
}
