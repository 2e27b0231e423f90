use std::sync::Arc;

use super::PageQueryService;
use crate::{
    application::{
        authors::AuthorDirectory,
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::PageId,
};

pub struct GetPageQuery {
    pub id: i64,
}

impl PageQueryService {
    pub async fn get_page(
        &self,
        actor: &AuthenticatedUser,
        query: GetPageQuery,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "read")?;
        let page = self.load_page(PageId::existing(query.id)?).await?;
        let author = AuthorDirectory::new(Arc::clone(&self.user_repo))
            .resolve(page.author_id)
            .await?;
        Ok(PageDto::from_parts(page, author))
    }
}
