use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The stored account behind a token. Accounts disabled after the token
    /// was issued are refused.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserProfileDto> {
        match self.user_repo.find_by_id(actor.id).await? {
            Some(user) if user.is_active => {
                Ok(UserProfileDto::from_parts(user, actor, self.clock.now()))
            }
            Some(_) => Err(ApplicationError::forbidden("account is disabled")),
            None => Err(ApplicationError::not_found("user not found")),
        }
    }
}
