//! Record types for user entries.

use crate::{error::Result, Error, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Company a user belongs to, as delivered by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name, used as the department fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other company fields (catch phrase, etc.)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// Create a company with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

/// A user record in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier, unique within the collection once merged
    #[serde(default)]
    pub id: UserId,
    /// Full name, "first last" by convention
    pub name: String,
    /// Email address
    pub email: String,
    /// Department, when set directly on the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Company, when the record came from the remote API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Fields the dashboard does not interpret (phone, address, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a user with a direct department.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            department: Some(department.into()),
            company: None,
            extra: Map::new(),
        }
    }

    /// Builder-style company assignment.
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    /// Builder-style removal of the direct department.
    pub fn without_department(mut self) -> Self {
        self.department = None;
        self
    }

    /// Text before the first space of the name (the whole name if none).
    pub fn first_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map_or(self.name.as_str(), |(first, _)| first)
    }

    /// Text after the first space of the name, empty if there is none.
    pub fn last_name(&self) -> &str {
        self.name.split_once(' ').map_or("", |(_, last)| last)
    }

    /// Department if set, else the company name, else empty.
    ///
    /// Empty strings count as absent at each step.
    pub fn effective_department(&self) -> &str {
        self.department
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                self.company
                    .as_ref()
                    .and_then(|c| c.name.as_deref())
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or("")
    }

    /// Initial values for an inline edit of this record.
    pub fn edit_seed(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            department: Some(self.effective_department().to_string()),
        }
    }

    /// Merge the provided patch fields into this record.
    ///
    /// The id and any field the patch leaves out are untouched.
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(department) = &patch.department {
            self.department = Some(department.clone());
        }
    }
}

/// Input for adding a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

impl UserDraft {
    /// Create a new draft.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Trim every field and reject the draft if any ends up empty.
    pub fn normalize(self) -> Result<Self> {
        let draft = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        };

        if draft.name.is_empty() {
            return Err(Error::MissingRequiredField("name"));
        }
        if draft.email.is_empty() {
            return Err(Error::MissingRequiredField("email"));
        }
        if draft.department.is_empty() {
            return Err(Error::MissingRequiredField("department"));
        }

        Ok(draft)
    }

    /// Turn the draft into a record with the given id.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.email, self.department)
    }
}

/// Partial field set for editing a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserPatch {
    /// Reject a patch that provides a field which is blank after trimming.
    ///
    /// Values are stored as given; trimming is only used for the check.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("department", &self.department),
        ];
        for (field, value) in fields {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(Error::MissingRequiredField(field));
            }
        }
        Ok(())
    }
}
