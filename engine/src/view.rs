//! View state - the parameters that decide which slice of the collection is shown.
//!
//! A [`ViewState`] is an immutable value. Every transition returns a new
//! value and applies the page-reset rules: changing the search term, the
//! filters, or the page size goes back to page 1; changing the sort does not.
//! Setting the search term or page size to its current value keeps the page.

use crate::{
    error::Result,
    paginate::{self, Page},
    query, FilterCriteria, PageSize, PageState, SortConfig, SortKey, User,
};
use serde::{Deserialize, Serialize};

/// Search, filters, sort, and page position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    pub filters: FilterCriteria,
    pub sort: SortConfig,
    pub page: PageState,
}

impl ViewState {
    /// Replace the search term; back to page 1 if it changed.
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        let search_term = term.into();
        if search_term == self.search_term {
            return self.clone();
        }
        Self {
            search_term,
            page: self.first_page(),
            ..self.clone()
        }
    }

    /// Replace the filters; back to page 1.
    pub fn with_filters(&self, filters: FilterCriteria) -> Self {
        Self {
            filters,
            page: self.first_page(),
            ..self.clone()
        }
    }

    /// Toggle the sort on a column header; the page is kept.
    pub fn with_sort_toggled(&self, key: SortKey) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self.clone()
        }
    }

    /// Jump to a page. Pages past the end are allowed and simply show nothing.
    pub fn with_page(&self, page: usize) -> Result<Self> {
        Ok(Self {
            page: PageState::new(page, self.page.rows_per_page)?,
            ..self.clone()
        })
    }

    /// Replace the page size; back to page 1 if it changed.
    pub fn with_rows_per_page(&self, rows_per_page: PageSize) -> Self {
        if rows_per_page == self.page.rows_per_page {
            return self.clone();
        }
        Self {
            page: PageState {
                current_page: 1,
                rows_per_page,
            },
            ..self.clone()
        }
    }

    /// Advance one page, staying put on the last page.
    pub fn next_page(&self, total_pages: usize) -> Self {
        let mut next = self.clone();
        if next.page.current_page < total_pages {
            next.page.current_page += 1;
        }
        next
    }

    /// Go back one page, staying put on page 1.
    pub fn prev_page(&self) -> Self {
        let mut prev = self.clone();
        if prev.page.current_page > 1 {
            prev.page.current_page -= 1;
        }
        prev
    }

    /// Filtered, searched, and sorted records, in display order.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        query::query(users, &self.filters, &self.search_term, self.sort)
    }

    /// The current page of an ordered view produced by [`ViewState::apply`].
    pub fn page_of<'v, 'a>(&self, ordered: &'v [&'a User]) -> Page<'v, &'a User> {
        paginate::paginate(ordered, self.page)
    }

    fn first_page(&self) -> PageState {
        PageState {
            current_page: 1,
            rows_per_page: self.page.rows_per_page,
        }
    }
}
