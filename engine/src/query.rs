//! Query engine - filtering, free-text search, and sorting.
//!
//! Everything here is a pure function of the collection and the view
//! parameters. Matching is case-insensitive substring containment.

use crate::{Error, User};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

/// Per-field substring filters. An empty field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// Column a view is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Email,
    Department,
}

impl SortKey {
    /// The string a record is compared by for this key.
    ///
    /// Ids compare by their decimal text, so "10" sorts before "2".
    /// Department uses the raw field, not the company fallback.
    pub fn value<'a>(&self, user: &'a User) -> Cow<'a, str> {
        match self {
            SortKey::Id => Cow::Owned(user.id.to_string()),
            SortKey::Name => Cow::Borrowed(&user.name),
            SortKey::Email => Cow::Borrowed(&user.email),
            SortKey::Department => Cow::Borrowed(user.department.as_deref().unwrap_or("")),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "department" => Ok(SortKey::Department),
            other => Err(Error::InvalidSortKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::Name => write!(f, "name"),
            SortKey::Email => write!(f, "email"),
            SortKey::Department => write!(f, "department"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The single active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Create a sort config.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Clicking a column header: same key flips direction, a new key sorts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }

    /// Compare two records under this sort.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = self.key.value(a).cmp(&self.key.value(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Lowercased filter and search needles, computed once per query.
struct Needles {
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    search: String,
}

impl Needles {
    fn new(filters: &FilterCriteria, search_term: &str) -> Self {
        Self {
            first_name: filters.first_name.to_lowercase(),
            last_name: filters.last_name.to_lowercase(),
            email: filters.email.to_lowercase(),
            department: filters.department.to_lowercase(),
            search: search_term.to_lowercase(),
        }
    }

    fn matches(&self, user: &User) -> bool {
        let name = user.name.to_lowercase();
        let email = user.email.to_lowercase();

        contains(user.first_name(), &self.first_name)
            && contains(user.last_name(), &self.last_name)
            && email.contains(&self.email)
            && contains(user.effective_department(), &self.department)
            && (name.contains(&self.search) || email.contains(&self.search))
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}

/// Whether a record passes every filter and the search term.
pub fn matches(user: &User, filters: &FilterCriteria, search_term: &str) -> bool {
    Needles::new(filters, search_term).matches(user)
}

/// Filter, search, and sort the collection.
///
/// The sort is stable: records with equal keys keep their collection order.
pub fn query<'a>(
    users: &'a [User],
    filters: &FilterCriteria,
    search_term: &str,
    sort: SortConfig,
) -> Vec<&'a User> {
    let needles = Needles::new(filters, search_term);
    let mut result: Vec<&User> = users.iter().filter(|u| needles.matches(u)).collect();
    result.sort_by(|a, b| sort.compare(a, b));
    result
}
