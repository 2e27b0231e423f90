use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageFilter, PageUpdate};
use crate::domain::page::module::{NewPageModule, PageModule, PageModuleUpdate};
use crate::domain::page::revision::{PageRevision, RevisionPolicy};
use crate::domain::page::value_objects::{ModuleId, PageId, PageSlug, RevisionId};
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;

    /// Apply `update` atomically. The policy is evaluated against the stored
    /// row inside the same unit of work, and any snapshot it calls for is
    /// persisted before the patch; if either step fails nothing is written.
    async fn update(&self, update: PageUpdate, policy: RevisionPolicy) -> DomainResult<Page>;

    /// Hard delete; modules and revisions go with the page.
    async fn delete(&self, id: PageId) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>>;
    async fn find_published_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>>;
    /// Most recently updated first.
    async fn list(&self, filter: &PageFilter) -> DomainResult<Vec<Page>>;
    /// Published pages, most recently published first.
    async fn list_published(&self) -> DomainResult<Vec<Page>>;
}

#[async_trait]
pub trait PageModuleRepository: Send + Sync {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageModule>>;
    async fn insert(&self, module: NewPageModule) -> DomainResult<PageModule>;
    async fn update(&self, update: PageModuleUpdate) -> DomainResult<PageModule>;
    async fn delete(&self, page_id: PageId, id: ModuleId) -> DomainResult<()>;
}

/// Revisions are append-only; they are written by [`PageWriteRepository::update`].
#[async_trait]
pub trait PageRevisionRepository: Send + Sync {
    /// Newest first.
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageRevision>>;
    /// `None` unless the revision exists *and* belongs to `page_id`.
    async fn find_for_page(
        &self,
        page_id: PageId,
        id: RevisionId,
    ) -> DomainResult<Option<PageRevision>>;
}
