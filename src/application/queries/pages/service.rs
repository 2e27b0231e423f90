use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        page::{Page, PageId, PageModuleRepository, PageReadRepository, PageRevisionRepository},
        user::UserRepository,
    },
};

/// Admin-side reads. Every query requires `pages:read`.
pub struct PageQueryService {
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) module_repo: Arc<dyn PageModuleRepository>,
    pub(super) revision_repo: Arc<dyn PageRevisionRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl PageQueryService {
    pub fn new(
        read_repo: Arc<dyn PageReadRepository>,
        module_repo: Arc<dyn PageModuleRepository>,
        revision_repo: Arc<dyn PageRevisionRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            module_repo,
            revision_repo,
            user_repo,
        }
    }

    pub(super) async fn load_page(&self, id: PageId) -> ApplicationResult<Page> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }
}
