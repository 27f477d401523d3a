//! Filter criteria edited through the filter panel.

use serde::{Serialize, Serializer};

/// Form value standing for "no restriction".
pub const ALL: &str = "all";

/// A categorical selector: either unrestricted or one specific value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// Parses a form value; `"all"` and blank values mean no restriction.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// The selected value, `None` when unrestricted.
    pub fn value(&self) -> Option<&str> {
        match self {
            Selector::All => None,
            Selector::Only(value) => Some(value),
        }
    }

    /// Value echoed back into the `<select>` element.
    pub fn as_form_value(&self) -> &str {
        self.value().unwrap_or(ALL)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_form_value())
    }
}

/// Dimensions of [`TeacherFilter`] a predicate can be registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    School,
    GradeLevel,
    Subject,
    Role,
    Status,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Search,
        FilterField::School,
        FilterField::GradeLevel,
        FilterField::Subject,
        FilterField::Role,
        FilterField::Status,
    ];
}

/// User-chosen criteria narrowing the teacher list.
///
/// Values are replaced wholesale: every `with_*` method returns a new
/// filter differing in exactly one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeacherFilter {
    pub search: String,
    pub school: Selector,
    pub grade_level: Selector,
    pub subject: Selector,
    pub role: Selector,
    pub status: Selector,
    /// Account setting shown in the panel; not a filter criterion.
    pub allow_tracker_creation: bool,
}

impl Default for TeacherFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            school: Selector::All,
            grade_level: Selector::All,
            subject: Selector::All,
            role: Selector::All,
            status: Selector::All,
            allow_tracker_creation: true,
        }
    }
}

impl TeacherFilter {
    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_school(self, school: Selector) -> Self {
        Self { school, ..self }
    }

    #[must_use]
    pub fn with_grade_level(self, grade_level: Selector) -> Self {
        Self {
            grade_level,
            ..self
        }
    }

    #[must_use]
    pub fn with_subject(self, subject: Selector) -> Self {
        Self { subject, ..self }
    }

    #[must_use]
    pub fn with_role(self, role: Selector) -> Self {
        Self { role, ..self }
    }

    #[must_use]
    pub fn with_status(self, status: Selector) -> Self {
        Self { status, ..self }
    }

    #[must_use]
    pub fn with_allow_tracker_creation(self, allow_tracker_creation: bool) -> Self {
        Self {
            allow_tracker_creation,
            ..self
        }
    }

    /// Value of an active criterion, `None` when the field sits at its default.
    pub fn criterion(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Search => Some(self.search.as_str()).filter(|s| !s.is_empty()),
            FilterField::School => self.school.value(),
            FilterField::GradeLevel => self.grade_level.value(),
            FilterField::Subject => self.subject.value(),
            FilterField::Role => self.role.value(),
            FilterField::Status => self.status.value(),
        }
    }

    /// Whether the panel should offer "Clear Filters".
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || [
                &self.school,
                &self.grade_level,
                &self.subject,
                &self.role,
                &self.status,
            ]
            .iter()
            .any(|selector| !selector.is_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_inactive() {
        let filter = TeacherFilter::default();
        assert!(!filter.has_active_filters());
        assert!(filter.allow_tracker_creation);
        for field in FilterField::ALL {
            assert_eq!(filter.criterion(field), None);
        }
    }

    #[test]
    fn toggle_is_not_an_active_filter() {
        let filter = TeacherFilter::default().with_allow_tracker_creation(false);
        assert!(!filter.has_active_filters());
    }

    #[test]
    fn blank_search_does_not_count_as_active() {
        let filter = TeacherFilter::default().with_search("   ");
        assert!(!filter.has_active_filters());
    }

    #[test]
    fn with_methods_change_a_single_field() {
        let base = TeacherFilter::default().with_search("ms.");
        let next = base.clone().with_status(Selector::parse("suspended"));

        assert_eq!(next.search, "ms.");
        assert_eq!(next.status, Selector::Only("suspended".to_string()));
        assert_eq!(next.school, base.school);
        assert!(next.has_active_filters());
    }

    #[test]
    fn selector_parses_all_sentinel() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse(""), Selector::All);
        assert_eq!(
            Selector::parse(" ps-middle "),
            Selector::Only("ps-middle".to_string())
        );
        assert_eq!(Selector::All.as_form_value(), "all");
    }
}
