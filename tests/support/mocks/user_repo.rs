// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;

use super::time::fixed_now;
use pagewright::domain::errors::{DomainError, DomainResult};
use pagewright::domain::user::{Email, NewUser, PasswordHash, Role, User, UserId, UserRepository};

pub const EDITOR_ID: i64 = 1;
pub const ADMIN_ID: i64 = 2;
pub const VIEWER_ID: i64 = 3;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// One account per role; every password is `Secret-pass1!`.
    pub fn seeded() -> Self {
        let user = |id: i64, email: &str, name: Option<&str>, role: Role| User {
            id: UserId::new(id).unwrap(),
            email: Email::new(email).unwrap(),
            password_hash: PasswordHash::new("hash:Secret-pass1!").unwrap(),
            name: name.map(str::to_owned),
            role,
            is_active: true,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        };
        Self {
            users: Mutex::new(vec![
                user(EDITOR_ID, "editor@example.com", Some("Erin Editor"), Role::Editor),
                user(ADMIN_ID, "admin@example.com", Some("Ada Admin"), Role::Admin),
                user(VIEWER_ID, "viewer@example.com", None, Role::Viewer),
            ]),
        }
    }

    pub fn deactivate(&self, id: i64) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|user| i64::from(user.id) == id) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::conflict("email already registered"));
        }
        let id = users.iter().map(|user| i64::from(user.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}
