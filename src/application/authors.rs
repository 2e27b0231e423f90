// src/application/authors.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{dto::AuthorView, error::ApplicationResult};
use crate::domain::user::{UserId, UserRepository};

/// Resolves author display fields, fetching each account at most once.
pub struct AuthorDirectory {
    user_repo: Arc<dyn UserRepository>,
    cache: HashMap<UserId, AuthorView>,
}

impl AuthorDirectory {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repo,
            cache: HashMap::new(),
        }
    }

    /// Unknown authors resolve to empty display fields, like a left join.
    pub async fn resolve(&mut self, id: UserId) -> ApplicationResult<AuthorView> {
        if let Some(view) = self.cache.get(&id) {
            return Ok(view.clone());
        }

        let view = self
            .user_repo
            .find_by_id(id)
            .await?
            .map(|user| AuthorView::from(&user))
            .unwrap_or_default();
        self.cache.insert(id, view.clone());
        Ok(view)
    }
}
