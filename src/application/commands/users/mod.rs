mod login;
mod password;
mod seed;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use seed::SeedAdminCommand;
pub use service::UserCommandService;
