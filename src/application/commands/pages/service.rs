// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::{
    application::{
        authors::AuthorDirectory,
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        page::{
            Page, PageId, PageModuleRepository, PageReadRepository, PageRevisionRepository,
            PageWriteRepository, services::PageSlugService,
        },
        user::UserRepository,
    },
};

pub struct PageCommandService {
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) module_repo: Arc<dyn PageModuleRepository>,
    pub(super) revision_repo: Arc<dyn PageRevisionRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<PageSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PageCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
        module_repo: Arc<dyn PageModuleRepository>,
        revision_repo: Arc<dyn PageRevisionRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<PageSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            module_repo,
            revision_repo,
            user_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_page(&self, id: PageId) -> ApplicationResult<Page> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }

    /// Parent references must point at an existing page other than `page`.
    pub(super) async fn ensure_parent(
        &self,
        parent_id: PageId,
        page: Option<PageId>,
    ) -> ApplicationResult<()> {
        if Some(parent_id) == page {
            return Err(ApplicationError::validation("a page cannot be its own parent"));
        }
        self.read_repo
            .find_by_id(parent_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApplicationError::not_found("parent page not found"))
    }

    pub(super) async fn present(&self, page: Page) -> ApplicationResult<PageDto> {
        let author = AuthorDirectory::new(Arc::clone(&self.user_repo))
            .resolve(page.author_id)
            .await?;
        Ok(PageDto::from_parts(page, author))
    }
}
