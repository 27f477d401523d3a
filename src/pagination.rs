//! Page arithmetic and the page-number window shown under the teacher list.

use std::ops::Range;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Page sizes offered by the "Show" selector.
pub const ALLOWED_PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Up to this many pages every page number is listed.
const MAX_INLINE_PAGES: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size {0} is not one of 5, 10, 20, 50")]
    InvalidPageSize(usize),

    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Number of items per page, restricted to [`ALLOWED_PAGE_SIZES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PaginationError> {
        if ALLOWED_PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(PaginationError::InvalidPageSize(size))
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub fn allowed() -> impl Iterator<Item = PageSize> {
        ALLOWED_PAGE_SIZES.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One entry of the page window. Serializes as the page number, or `null`
/// for an ellipsis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_none(),
        }
    }
}

/// Total pages for `count` items, never less than one.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

fn page_window(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    let last_page = total_pages;

    if last_page <= MAX_INLINE_PAGES {
        return (1..=last_page).map(PageToken::Page).collect();
    }

    let mut pages = vec![PageToken::Page(1)];

    if current_page <= 4 {
        pages.extend((2..=5.min(last_page - 1)).map(PageToken::Page));
        pages.push(PageToken::Ellipsis);
        pages.push(PageToken::Page(last_page));
    } else if current_page >= last_page - 3 {
        pages.push(PageToken::Ellipsis);
        pages.extend(((last_page - 4).max(2)..=last_page).map(PageToken::Page));
    } else {
        pages.push(PageToken::Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(PageToken::Page));
        pages.push(PageToken::Ellipsis);
        pages.push(PageToken::Page(last_page));
    }

    pages
}

/// Everything the list and the navigation controls need about one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: PageSize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Inclusive start of the slice into the filtered set.
    pub start: usize,
    /// Exclusive end of the slice into the filtered set.
    pub end: usize,
    pub window: Vec<PageToken>,
}

impl PageInfo {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The 1-based `(first, last, total)` of "Showing X to Y of Z".
    pub fn showing(&self) -> (usize, usize, usize) {
        let first = if self.total_items == 0 {
            0
        } else {
            self.start + 1
        };
        (first, self.end, self.total_items)
    }
}

/// Computes slice bounds and the page window for `current_page`.
///
/// `current_page` must lie in `1..=total_pages`; callers consult
/// [`total_pages`] before navigating. An empty set still has one page and an
/// empty window.
pub fn paginate(
    filtered_count: usize,
    page_size: PageSize,
    current_page: usize,
) -> Result<PageInfo, PaginationError> {
    let total_pages = total_pages(filtered_count, page_size);

    if current_page == 0 || current_page > total_pages {
        return Err(PaginationError::PageOutOfRange {
            page: current_page,
            total_pages,
        });
    }

    let start = (current_page - 1) * page_size.get();
    let end = (current_page * page_size.get()).min(filtered_count);

    let window = if filtered_count == 0 {
        vec![]
    } else {
        page_window(total_pages, current_page)
    };

    Ok(PageInfo {
        page: current_page,
        page_size,
        total_items: filtered_count,
        total_pages,
        start,
        end,
        window,
    })
}

/// Current page and page size of the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PaginationState {
    /// Changing the page size always starts over from the first page.
    #[must_use]
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn go_to(self, page: usize, total_pages: usize) -> Result<Self, PaginationError> {
        if page == 0 || page > total_pages {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        Ok(Self { page, ..self })
    }

    /// Falls back to the first page when the filtered set no longer reaches
    /// the current one.
    #[must_use]
    pub fn reconciled(self, filtered_count: usize) -> Self {
        if self.page == 0 || self.page > total_pages(filtered_count, self.page_size) {
            Self { page: 1, ..self }
        } else {
            self
        }
    }
}

/// A page of items together with its navigation data.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Paginated<T> {
    /// Cuts the page described by `state` out of the full filtered set.
    pub fn new(items: Vec<T>, state: PaginationState) -> Result<Self, PaginationError> {
        let info = paginate(items.len(), state.page_size, state.page)?;

        let items = items
            .into_iter()
            .skip(info.start)
            .take(info.end - info.start)
            .collect();

        Ok(Self { items, info })
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}
