// src/application/commands/pages/mod.rs
mod create;
mod delete;
mod duplicate;
mod modules;
mod publish;
mod restore;
mod service;
mod update;

pub use create::CreatePageCommand;
pub use delete::DeletePageCommand;
pub use duplicate::DuplicatePageCommand;
pub use modules::{AddModuleCommand, RemoveModuleCommand, UpdateModuleCommand};
pub use publish::{PublishPageCommand, UnpublishPageCommand};
pub use restore::RestoreRevisionCommand;
pub use service::PageCommandService;
pub use update::UpdatePageCommand;
