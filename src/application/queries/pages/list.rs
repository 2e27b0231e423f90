use std::sync::Arc;

use super::PageQueryService;
use crate::{
    application::{
        authors::AuthorDirectory,
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::{PageFilter, PageStatus},
};

#[derive(Debug, Clone, Default)]
pub struct ListPagesQuery {
    pub status: Option<PageStatus>,
    pub template: Option<String>,
    /// Case-insensitive substring over title or slug.
    pub search: Option<String>,
}

impl PageQueryService {
    pub async fn list_pages(
        &self,
        actor: &AuthenticatedUser,
        query: ListPagesQuery,
    ) -> ApplicationResult<Vec<PageDto>> {
        ensure_capability(actor, PAGES, "read")?;

        let filter = PageFilter {
            status: query.status,
            template: query.template.filter(|t| !t.trim().is_empty()),
            search: query.search.filter(|s| !s.trim().is_empty()),
        };
        let pages = self.read_repo.list(&filter).await?;

        let mut authors = AuthorDirectory::new(Arc::clone(&self.user_repo));
        let mut items = Vec::with_capacity(pages.len());
        for page in pages {
            let author = authors.resolve(page.author_id).await?;
            items.push(PageDto::from_parts(page, author));
        }
        Ok(items)
    }
}
