//! Paginator - fixed-size pages over an ordered view.

use crate::{error::Result, Error};
use serde::{Deserialize, Serialize};

/// Allowed rows-per-page values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Every page size, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Number of rows on a full page.
    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(rows: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.rows() == rows)
            .ok_or(Error::InvalidPageSize(rows))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// 1-based page number
    pub current_page: usize,
    pub rows_per_page: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: PageSize::default(),
        }
    }
}

impl PageState {
    /// Create a page state, rejecting page numbers below 1.
    pub fn new(current_page: usize, rows_per_page: PageSize) -> Result<Self> {
        if current_page == 0 {
            return Err(Error::InvalidPage(current_page));
        }
        Ok(Self {
            current_page,
            rows_per_page,
        })
    }
}

/// One page of an ordered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `rows_per_page` of them
    pub items: &'a [T],
    pub current_page: usize,
    /// `ceil(total_items / rows_per_page)`, zero for an empty view
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, size: PageSize) -> usize {
    count.div_ceil(size.rows())
}

/// Slice out the requested page.
///
/// A page past the end yields no items rather than an error.
pub fn paginate<T>(items: &[T], state: PageState) -> Page<'_, T> {
    let rows = state.rows_per_page.rows();
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(rows)
        .min(items.len());
    let end = start.saturating_add(rows).min(items.len());

    Page {
        items: &items[start..end],
        current_page: state.current_page,
        total_pages: total_pages(items.len(), state.rows_per_page),
        total_items: items.len(),
    }
}
