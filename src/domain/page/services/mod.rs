// src/domain/page/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::repository::PageReadRepository;
use crate::domain::page::value_objects::{PageId, PageSlug, PageTitle};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Domain service guarding slug uniqueness for pages.
pub struct PageSlugService {
    read_repo: Arc<dyn PageReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PageSlugService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn derive(&self, title: &PageTitle) -> DomainResult<PageSlug> {
        let derived = self.generator.slugify(title.as_str());
        if derived.is_empty() {
            return Err(DomainError::Validation(format!(
                "cannot derive a slug from title '{title}'"
            )));
        }
        PageSlug::new(derived)
    }

    /// Fails with `Conflict` when another page holds `slug`. The page named by
    /// `owner` may keep its own slug.
    pub async fn ensure_available(&self, slug: &PageSlug, owner: Option<PageId>) -> DomainResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(DomainError::Conflict(format!(
                "a page with slug '{slug}' already exists"
            ))),
            _ => Ok(()),
        }
    }

    /// `base`, or the first of `base-1`, `base-2`, ... not held by any page.
    pub async fn next_free(&self, base: &PageSlug) -> DomainResult<PageSlug> {
        let mut candidate = base.clone();
        let mut counter = 1u64;

        while self.read_repo.find_by_slug(&candidate).await?.is_some() {
            candidate = base.with_suffix(counter);
            counter += 1;
        }

        Ok(candidate)
    }
}
