// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use super::time::fixed_now;
use super::user_repo::{ADMIN_ID, EDITOR_ID, VIEWER_ID};
use pagewright::application::ApplicationResult;
use pagewright::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use pagewright::application::error::ApplicationError;
use pagewright::application::ports::security::{PasswordHasher, TokenManager};
use pagewright::domain::user::{Role, UserId};

pub const TEST_TOKEN: &str = "test-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const VIEWER_TOKEN: &str = "viewer-token";

fn actor(id: i64, email: &str, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        email: email.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub fn editor() -> AuthenticatedUser {
    actor(EDITOR_ID, "editor@example.com", Role::Editor)
}

pub fn admin() -> AuthenticatedUser {
    actor(ADMIN_ID, "admin@example.com", Role::Admin)
}

pub fn viewer() -> AuthenticatedUser {
    actor(VIEWER_ID, "viewer@example.com", Role::Viewer)
}

/// Stores `hash:<password>` so verification stays string comparison.
#[derive(Clone, Copy)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hash:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Fixed tokens for each seeded role; anything else is rejected.
#[derive(Clone, Copy)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: format!("token-for-{}", i64::from(subject.user_id)),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(editor()),
            ADMIN_TOKEN => Ok(admin()),
            VIEWER_TOKEN => Ok(viewer()),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
