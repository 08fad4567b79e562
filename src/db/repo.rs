use std::sync::Arc;
use tokio::sync::RwLock;

use crate::db::models::{User, UserPatch};

/// Ordered in-memory collection of users. Insertion order is preserved and
/// duplicate ids are allowed; lookups return the first match.
#[derive(Debug, Default)]
pub struct Users {
    records: Vec<User>,
}

impl Users {
    pub fn new(records: Vec<User>) -> Self {
        Self { records }
    }

    /// The two records every fresh process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![User::new(1, "meriem"), User::new(2, "maria")])
    }

    pub fn all(&self) -> &[User] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.records.iter().find(|u| u.id == id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|u| u.id == id)
    }

    pub fn push(&mut self, user: User) {
        self.records.push(user);
    }

    pub fn merge_at(&mut self, index: usize, patch: UserPatch) -> Option<&User> {
        let user = self.records.get_mut(index)?;
        user.apply(patch);
        Some(user)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<User> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }
}

/// Shared handle to the user collection.
///
/// Every method takes the lock exactly once, so a lookup and the mutation that
/// depends on it are never split across two acquisitions.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Users>>,
}

impl UserStore {
    pub fn new(users: Users) -> Self {
        Self {
            inner: Arc::new(RwLock::new(users)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Users::seeded())
    }

    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.all().to_vec()
    }

    pub async fn get(&self, id: i64) -> Option<User> {
        self.inner.read().await.find(id).cloned()
    }

    pub async fn create(&self, user: User) {
        self.inner.write().await.push(user);
    }

    pub async fn patch(&self, id: i64, patch: UserPatch) -> Option<User> {
        let mut users = self.inner.write().await;
        let index = users.position(id)?;
        users.merge_at(index, patch).cloned()
    }

    pub async fn delete(&self, id: i64) -> Option<User> {
        let mut users = self.inner.write().await;
        let index = users.position(id)?;
        users.remove_at(index)
    }
}
