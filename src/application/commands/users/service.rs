use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

/// Account mutations: login and the first-run admin seed.
pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    /// Tokens carry the role's capability set as of issue time.
    pub(super) async fn issue_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        self.token_manager
            .issue(TokenSubject {
                user_id: user.id,
                email: user.email.to_string(),
                role: user.role,
                capabilities: user.role.default_capabilities(),
            })
            .await
    }
}
