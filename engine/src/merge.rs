//! Merge stage - builds the session collection from the two data sources.

use crate::{User, UserId};

/// How many local seed records are kept.
pub const LOCAL_SEED_LIMIT: usize = 90;

/// Local seed ids are `index + LOCAL_ID_OFFSET`.
///
/// Keeps local ids clear of the ten ids the remote API normally returns.
/// A remote set of any other size can collide with these ids.
pub const LOCAL_ID_OFFSET: UserId = 11;

/// Combine the remote records with the first [`LOCAL_SEED_LIMIT`] seed records.
///
/// Remote records keep their ids; seed records are renumbered by position.
pub fn merge(remote: Vec<User>, local: Vec<User>) -> Vec<User> {
    let mut users = remote;
    users.reserve(local.len().min(LOCAL_SEED_LIMIT));
    users.extend(
        local
            .into_iter()
            .take(LOCAL_SEED_LIMIT)
            .enumerate()
            .map(|(index, mut user)| {
                user.id = index as UserId + LOCAL_ID_OFFSET;
                user
            }),
    );
    users
}
