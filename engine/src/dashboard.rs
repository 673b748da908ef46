//! Dashboard - the single owner of the session's collection.
//!
//! The dashboard holds the records, the load state of the startup fetch, and
//! the current [`ViewState`]. Interaction events from the presentation
//! surface are applied through [`Dashboard::apply`]; what to show is produced
//! by [`Dashboard::render`].

use crate::{
    error::Result, merge, mutation, paginate, FilterCriteria, PageSize, SortConfig, SortKey,
    User, UserDraft, UserId, UserPatch, ViewState,
};
use serde::{Deserialize, Serialize};

/// Progress of the one startup fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Pending,
    /// Collection built from remote and seed data
    Ready,
    /// Fetch failed; the message is shown to the operator
    Failed(String),
}

/// An interaction event forwarded by the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    Add(UserDraft),
    Edit { id: UserId, patch: UserPatch },
    Delete { id: UserId },
    SetSearchTerm { term: String },
    SetFilter(FilterCriteria),
    SetSort { key: SortKey },
    SetPage { page: usize },
    SetRowsPerPage { rows_per_page: PageSize },
    NextPage,
    PrevPage,
}

/// What applying an event changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outcome {
    /// A record was appended
    Added { user: User },
    /// Whether a record with the id existed
    Edited { updated: bool },
    /// Whether a record with the id existed
    Deleted { deleted: bool },
    /// Only the view state moved
    ViewChanged,
}

/// One table row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Effective department
    pub department: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.effective_department().to_string(),
        }
    }
}

/// Everything the presentation surface needs to draw the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Rows of the current page; empty while loading or after a failed fetch
    pub rows: Vec<UserRow>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Records matching the filters and search, across all pages
    pub total_items: usize,
    pub rows_per_page: PageSize,
    pub sort: SortConfig,
    pub search_term: String,
    pub filters: FilterCriteria,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The coordinating owner of the collection and view state.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    users: Vec<User>,
    load: LoadState,
    view: ViewState,
}

impl Dashboard {
    /// An empty dashboard waiting for its fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ready dashboard over an existing collection.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            load: LoadState::Ready,
            view: ViewState::default(),
        }
    }

    /// All records, in collection order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a record by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Mark the startup fetch as in flight.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Pending;
    }

    /// Build the collection from the fetched and seed records.
    ///
    /// Replaces whatever the collection held before, including records added
    /// while the fetch was pending.
    pub fn finish_load(&mut self, remote: Vec<User>, local: Vec<User>) {
        self.users = merge::merge(remote, local);
        self.load = LoadState::Ready;
    }

    /// Record a failed fetch. The collection is left as it is.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    /// Initial values for editing a record inline.
    pub fn edit_seed(&self, id: UserId) -> Option<UserPatch> {
        self.get(id).map(User::edit_seed)
    }

    /// Validate a draft and append it with the next free id.
    pub fn add(&mut self, draft: UserDraft) -> Result<&User> {
        mutation::add(&mut self.users, draft)
    }

    /// Edit a record from the inline editor.
    ///
    /// Provided fields must not be blank. Returns whether the id was found.
    pub fn edit(&mut self, id: UserId, patch: &UserPatch) -> Result<bool> {
        patch.validate()?;
        Ok(mutation::edit(&mut self.users, id, patch))
    }

    /// Delete a record. Returns whether the id was found.
    pub fn delete(&mut self, id: UserId) -> bool {
        mutation::delete(&mut self.users, id)
    }

    /// Apply one interaction event.
    ///
    /// Validation failures leave the dashboard untouched.
    pub fn apply(&mut self, event: Event) -> Result<Outcome> {
        let outcome = match event {
            Event::Add(draft) => Outcome::Added {
                user: self.add(draft)?.clone(),
            },
            Event::Edit { id, patch } => Outcome::Edited {
                updated: self.edit(id, &patch)?,
            },
            Event::Delete { id } => Outcome::Deleted {
                deleted: self.delete(id),
            },
            Event::SetSearchTerm { term } => {
                self.view = self.view.with_search_term(term);
                Outcome::ViewChanged
            }
            Event::SetFilter(filters) => {
                self.view = self.view.with_filters(filters);
                Outcome::ViewChanged
            }
            Event::SetSort { key } => {
                self.view = self.view.with_sort_toggled(key);
                Outcome::ViewChanged
            }
            Event::SetPage { page } => {
                self.view = self.view.with_page(page)?;
                Outcome::ViewChanged
            }
            Event::SetRowsPerPage { rows_per_page } => {
                self.view = self.view.with_rows_per_page(rows_per_page);
                Outcome::ViewChanged
            }
            Event::NextPage => {
                let total_pages = self.total_pages();
                self.view = self.view.next_page(total_pages);
                Outcome::ViewChanged
            }
            Event::PrevPage => {
                self.view = self.view.prev_page();
                Outcome::ViewChanged
            }
        };
        Ok(outcome)
    }

    /// Pages in the current filtered view.
    pub fn total_pages(&self) -> usize {
        let count = self.view.apply(&self.users).len();
        paginate::total_pages(count, self.view.page.rows_per_page)
    }

    /// Produce the view model for the current state.
    pub fn render(&self) -> ViewModel {
        let ordered = self.view.apply(&self.users);
        let page = self.view.page_of(&ordered);

        let (rows, error, loading) = match &self.load {
            LoadState::Ready => (
                page.items.iter().map(|u| UserRow::from(*u)).collect(),
                None,
                false,
            ),
            LoadState::Pending => (Vec::new(), None, true),
            LoadState::Failed(message) => (Vec::new(), Some(message.clone()), false),
        };

        ViewModel {
            rows,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            rows_per_page: self.view.page.rows_per_page,
            sort: self.view.sort,
            search_term: self.view.search_term.clone(),
            filters: self.view.filters.clone(),
            loading,
            error,
        }
    }
}
