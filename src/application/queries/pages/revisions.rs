use std::sync::Arc;

use super::PageQueryService;
use crate::{
    application::{
        authors::AuthorDirectory,
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageRevisionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{PageId, RevisionId},
};

pub struct ListRevisionsQuery {
    pub page_id: i64,
}

pub struct GetRevisionQuery {
    pub page_id: i64,
    pub revision_id: i64,
}

impl PageQueryService {
    /// Newest first.
    pub async fn list_revisions(
        &self,
        actor: &AuthenticatedUser,
        query: ListRevisionsQuery,
    ) -> ApplicationResult<Vec<PageRevisionDto>> {
        ensure_capability(actor, PAGES, "read")?;
        let page_id = PageId::existing(query.page_id)?;
        self.load_page(page_id).await?;

        let revisions = self.revision_repo.list_by_page(page_id).await?;
        let mut authors = AuthorDirectory::new(Arc::clone(&self.user_repo));
        let mut items = Vec::with_capacity(revisions.len());
        for revision in revisions {
            let author = authors.resolve(revision.author_id).await?;
            items.push(PageRevisionDto::from_parts(revision, author));
        }
        Ok(items)
    }

    /// A revision of another page is reported as missing.
    pub async fn get_revision(
        &self,
        actor: &AuthenticatedUser,
        query: GetRevisionQuery,
    ) -> ApplicationResult<PageRevisionDto> {
        ensure_capability(actor, PAGES, "read")?;
        let page_id = PageId::existing(query.page_id)?;
        let revision_id = RevisionId::existing(query.revision_id)?;

        let revision = self
            .revision_repo
            .find_for_page(page_id, revision_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("revision not found"))?;
        let author = AuthorDirectory::new(Arc::clone(&self.user_repo))
            .resolve(revision.author_id)
            .await?;
        Ok(PageRevisionDto::from_parts(revision, author))
    }
}
