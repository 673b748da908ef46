//! Mutation gateway - add, edit, and delete over the collection.
//!
//! Edits and deletes of an id that is not in the collection are silent
//! no-ops; the returned flag tells the caller whether anything changed.

use crate::{error::Result, Error, User, UserDraft, UserId, UserPatch};

/// Next free id: one past the highest id in the collection, or 1 when empty.
///
/// Recomputed on every add, so deleting the highest record frees its id.
/// Fails once the highest id is `UserId::MAX`.
pub fn next_id(users: &[User]) -> Result<UserId> {
    let max = users.iter().map(|u| u.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(Error::IdSpaceExhausted(max))
}

/// Validate a draft and append it with a freshly allocated id.
pub fn add(users: &mut Vec<User>, draft: UserDraft) -> Result<&User> {
    let draft = draft.normalize()?;
    let user = draft.into_user(next_id(users)?);
    users.push(user);
    Ok(&users[users.len() - 1])
}

/// Merge `patch` into every record with this id.
///
/// Returns whether a record was found. The patch is not validated here.
pub fn edit(users: &mut [User], id: UserId, patch: &UserPatch) -> bool {
    let mut found = false;
    for user in users.iter_mut().filter(|u| u.id == id) {
        user.apply_patch(patch);
        found = true;
    }
    found
}

/// Remove every record with this id. Returns whether anything was removed.
pub fn delete(users: &mut Vec<User>, id: UserId) -> bool {
    let before = users.len();
    users.retain(|u| u.id != id);
    users.len() != before
}
