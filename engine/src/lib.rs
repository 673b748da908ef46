//! # Roster Engine
//!
//! The record pipeline behind the Roster user-management dashboard.
//!
//! This crate merges remote and seed user records into one collection, then
//! filters, searches, sorts, and paginates it, and applies add/edit/delete
//! mutations. It has no IO: the same inputs always produce the same outputs.
//!
//! ## Pipeline
//!
//! ```text
//! remote ++ seed ──merge──▶ collection ──filter/search/sort──▶ ordered view ──paginate──▶ page
//! ```
//!
//! - [`merge::merge`] keeps remote ids and renumbers the first 90 seed
//!   records as `index + 11`.
//! - [`query::query`] ANDs four per-field filters with a name-or-email search
//!   and sorts by one column, comparing values as strings.
//! - [`paginate::paginate`] slices fixed-size pages; pages past the end are empty.
//! - [`mutation`] adds with `id = max + 1`, edits by id, deletes by id.
//!
//! ## View state
//!
//! Search term, filters, sort, and page position travel together as an
//! immutable [`ViewState`]. Its transitions encode when the page resets to 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_engine::{Company, Dashboard, Event, User, UserDraft};
//!
//! let remote = vec![User::new(1, "Leanne Graham", "Sincere@april.biz", "")
//!     .without_department()
//!     .with_company(Company::named("Romaguera-Crona"))];
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.finish_load(remote, Vec::new());
//!
//! dashboard
//!     .apply(Event::Add(UserDraft::new("Ada Lovelace", "ada@example.com", "Engineering")))
//!     .unwrap();
//! dashboard
//!     .apply(Event::SetSearchTerm { term: "leanne".into() })
//!     .unwrap();
//!
//! let model = dashboard.render();
//! assert_eq!(model.rows.len(), 1);
//! assert_eq!(model.rows[0].department, "Romaguera-Crona");
//! ```

pub mod dashboard;
pub mod error;
pub mod merge;
pub mod mutation;
pub mod paginate;
pub mod query;
pub mod record;
pub mod view;

// Re-export main types at crate root
pub use dashboard::{Dashboard, Event, LoadState, Outcome, UserRow, ViewModel};
pub use error::Error;
pub use merge::{LOCAL_ID_OFFSET, LOCAL_SEED_LIMIT};
pub use paginate::{Page, PageSize, PageState};
pub use query::{FilterCriteria, SortConfig, SortDirection, SortKey};
pub use record::{Company, User, UserDraft, UserPatch};
pub use view::ViewState;

/// Type alias for record identifiers
pub type UserId = i64;
