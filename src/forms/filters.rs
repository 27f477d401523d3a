//! Query-string form carrying the filter panel and pagination state.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::filter::{Selector, TeacherFilter};
use crate::domain::listing::ListingState;
use crate::forms::FormError;
use crate::pagination::{PageSize, PaginationState};

/// Parameters of `GET /`. Every field is optional so a bare `/` shows the
/// default listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct FiltersForm {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 100))]
    pub search: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub school: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub grade_level: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_tracker_creation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

fn parse_toggle(value: Option<&str>) -> bool {
    !matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("false" | "off" | "0" | "no")
    )
}

fn selector_value(selector: &Selector) -> String {
    selector.value().unwrap_or_default().to_string()
}

impl TryFrom<FiltersForm> for ListingState {
    type Error = FormError;

    fn try_from(form: FiltersForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let page = match form.page {
            Some(0) => return Err(FormError::InvalidPage),
            Some(page) => page,
            None => 1,
        };

        let page_size = match form.per_page.map(PageSize::new).transpose() {
            Ok(size) => size.unwrap_or_default(),
            Err(err) => {
                log::warn!("Falling back to the default page size: {err}");
                PageSize::default()
            }
        };

        let filter = TeacherFilter::default()
            .with_search(form.search)
            .with_school(Selector::parse(&form.school))
            .with_grade_level(Selector::parse(&form.grade_level))
            .with_subject(Selector::parse(&form.subject))
            .with_role(Selector::parse(&form.role))
            .with_status(Selector::parse(&form.status))
            .with_allow_tracker_creation(parse_toggle(form.allow_tracker_creation.as_deref()));

        Ok(ListingState {
            filter,
            pagination: PaginationState { page, page_size },
        })
    }
}

impl From<&ListingState> for FiltersForm {
    /// Form holding `state`; defaults are left out to keep links short.
    fn from(state: &ListingState) -> Self {
        let filter = &state.filter;
        let page_size = state.pagination.page_size;

        Self {
            search: filter.search.clone(),
            school: selector_value(&filter.school),
            grade_level: selector_value(&filter.grade_level),
            subject: selector_value(&filter.subject),
            role: selector_value(&filter.role),
            status: selector_value(&filter.status),
            allow_tracker_creation: (!filter.allow_tracker_creation).then(|| "false".to_string()),
            per_page: (page_size != PageSize::default()).then_some(page_size.get()),
            page: (state.pagination.page != 1).then_some(state.pagination.page),
        }
    }
}

impl FiltersForm {
    /// Encodes the form as a query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_else(|err| {
            log::error!("Failed to encode listing query: {err}");
            String::new()
        })
    }

    #[must_use]
    pub fn without_page(self) -> Self {
        Self { page: None, ..self }
    }
}
