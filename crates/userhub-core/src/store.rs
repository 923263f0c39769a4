//! In-memory user store.
//!
//! The id map and the `next_id` counter live behind a single `RwLock`, so
//! readers run in parallel and every writer excludes everyone else. Reads
//! therefore see either the fully-old or fully-new record, never a mix.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, UserHubError};
use crate::model::{User, UserId, UserInput};

struct StoreInner {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Concurrency-safe repository of user records with server-assigned ids.
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    // No critical section can panic midway, so a poisoned lock still guards a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new record under the next id and return it.
    pub fn create(&self, input: UserInput) -> User {
        let mut g = self.write();
        let id = g.next_id;
        g.next_id += 1;

        let user = input.into_user(id);
        g.users.insert(id, user.clone());
        tracing::trace!(user_id = id, "user created");
        user
    }

    /// Snapshot of every record, in ascending id order.
    pub fn get_all(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: UserId) -> Result<User> {
        self.read()
            .users
            .get(&id)
            .cloned()
            .ok_or(UserHubError::NotFound(id))
    }

    /// Replace every mutable field of `id` with `input` (not a merge).
    pub fn update(&self, id: UserId, input: UserInput) -> Result<User> {
        let mut g = self.write();
        let slot = g.users.get_mut(&id).ok_or(UserHubError::NotFound(id))?;
        *slot = input.into_user(id);
        tracing::trace!(user_id = id, "user updated");
        Ok(slot.clone())
    }

    pub fn delete(&self, id: UserId) -> Result<()> {
        let mut g = self.write();
        g.users.remove(&id).ok_or(UserHubError::NotFound(id))?;
        tracing::trace!(user_id = id, "user deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().users.is_empty()
    }
}
