use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, Role},
};

pub struct SeedAdminCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl UserCommandService {
    /// Create the initial administrator. Does nothing once any account exists.
    pub async fn seed_admin(&self, command: SeedAdminCommand) -> ApplicationResult<Option<UserDto>> {
        if self.user_repo.count().await? > 0 {
            return Ok(None);
        }

        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let hash = self.password_hasher.hash(&command.password).await?;

        let new_user = NewUser::new(
            email,
            PasswordHash::new(hash)?,
            command.name,
            Role::Admin,
            self.clock.now(),
        );
        let created = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(created.id), email = %created.email, "seeded admin account");
        Ok(Some(created.into()))
    }
}
