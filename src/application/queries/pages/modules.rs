use super::PageQueryService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageModuleDto},
        error::ApplicationResult,
    },
    domain::page::PageId,
};

pub struct ListModulesQuery {
    pub page_id: i64,
}

impl PageQueryService {
    /// Ordered by sort key, then id.
    pub async fn list_modules(
        &self,
        actor: &AuthenticatedUser,
        query: ListModulesQuery,
    ) -> ApplicationResult<Vec<PageModuleDto>> {
        ensure_capability(actor, PAGES, "read")?;
        let page_id = PageId::existing(query.page_id)?;
        self.load_page(page_id).await?;

        let modules = self.module_repo.list_by_page(page_id).await?;
        Ok(modules.into_iter().map(Into::into).collect())
    }
}
