pub mod entity;
pub mod module;
pub mod repository;
pub mod revision;
pub mod services;
pub mod value_objects;

pub use entity::{NewPage, Page, PageFilter, PageUpdate};
pub use module::{NewPageModule, PageModule, PageModuleUpdate};
pub use repository::{
    PageModuleRepository, PageReadRepository, PageRevisionRepository, PageWriteRepository,
};
pub use revision::{ModuleSnapshot, NewPageRevision, PageRevision, RevisionPolicy, RevisionSnapshot};
pub use value_objects::{
    MediaId, ModuleId, PageContent, PageId, PageSlug, PageStatus, PageTemplate, PageTitle,
    RevisionId,
};
