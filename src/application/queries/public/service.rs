//! Anonymous reads for the public site. Drafts and scheduled pages are
//! invisible here.
use std::sync::Arc;

use crate::{
    application::{
        authors::AuthorDirectory,
        dto::{PublicPageDto, PublicPageSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        page::{PageModuleRepository, PageReadRepository, PageSlug},
        user::UserRepository,
    },
};

pub struct GetPublishedPageQuery {
    pub slug: String,
}

pub struct PublicPageQueryService {
    read_repo: Arc<dyn PageReadRepository>,
    module_repo: Arc<dyn PageModuleRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl PublicPageQueryService {
    pub fn new(
        read_repo: Arc<dyn PageReadRepository>,
        module_repo: Arc<dyn PageModuleRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            module_repo,
            user_repo,
        }
    }

    /// Most recently published first.
    pub async fn list_published(&self) -> ApplicationResult<Vec<PublicPageSummaryDto>> {
        let pages = self.read_repo.list_published().await?;
        let mut authors = AuthorDirectory::new(Arc::clone(&self.user_repo));
        let mut items = Vec::with_capacity(pages.len());
        for page in pages {
            let author = authors.resolve(page.author_id).await?;
            items.push(PublicPageSummaryDto::from_parts(page, author));
        }
        Ok(items)
    }

    pub async fn get_published_by_slug(
        &self,
        query: GetPublishedPageQuery,
    ) -> ApplicationResult<PublicPageDto> {
        let slug = PageSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("page not found"))?;
        let page = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let modules = self.module_repo.list_by_page(page.id).await?;
        let author = AuthorDirectory::new(Arc::clone(&self.user_repo))
            .resolve(page.author_id)
            .await?;
        Ok(PublicPageDto::from_parts(page, author, modules))
    }
}
