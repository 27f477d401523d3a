//! Screen state of the teacher listing.

use serde::Serialize;

use crate::domain::filter::TeacherFilter;
use crate::pagination::{PageSize, PaginationError, PaginationState};

/// Filter and page position owned by the caller and replaced on every
/// interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListingState {
    pub filter: TeacherFilter,
    pub pagination: PaginationState,
}

impl ListingState {
    #[must_use]
    pub fn with_filter(self, filter: TeacherFilter) -> Self {
        Self { filter, ..self }
    }

    /// Resets every criterion to its default.
    #[must_use]
    pub fn cleared(self) -> Self {
        self.with_filter(TeacherFilter::default())
    }

    #[must_use]
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            pagination: self.pagination.with_page_size(page_size),
            ..self
        }
    }

    pub fn go_to(self, page: usize, total_pages: usize) -> Result<Self, PaginationError> {
        Ok(Self {
            pagination: self.pagination.go_to(page, total_pages)?,
            ..self
        })
    }

    /// Re-clamps the page after the filtered set changed size.
    #[must_use]
    pub fn reconciled(self, filtered_count: usize) -> Self {
        Self {
            pagination: self.pagination.reconciled(filtered_count),
            ..self
        }
    }
}
