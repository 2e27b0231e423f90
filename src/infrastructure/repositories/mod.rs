// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_module;
mod sqlite_page;
mod sqlite_revision;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_module::SqliteModuleRepository;
pub use sqlite_page::SqlitePageRepository;
pub use sqlite_revision::SqliteRevisionRepository;
pub use sqlite_user::SqliteUserRepository;
