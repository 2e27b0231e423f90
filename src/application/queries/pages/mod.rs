mod get;
mod list;
mod modules;
mod revisions;
mod service;

pub use get::GetPageQuery;
pub use list::ListPagesQuery;
pub use modules::ListModulesQuery;
pub use revisions::{GetRevisionQuery, ListRevisionsQuery};
pub use service::PageQueryService;
