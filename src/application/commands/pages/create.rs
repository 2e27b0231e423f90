// src/application/commands/pages/create.rs
use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::{
        MediaId, NewPage, PageContent, PageId, PageSlug, PageStatus, PageTemplate, PageTitle,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreatePageCommand {
    pub title: String,
    /// Derived from the title when absent or blank.
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub template: Option<String>,
    pub status: Option<PageStatus>,
    pub parent_id: Option<i64>,
    pub featured_image_id: Option<i64>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl CreatePageCommand {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl PageCommandService {
    pub async fn create_page(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePageCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "create")?;

        let title = PageTitle::new(command.title)?;
        let slug = match command.slug.filter(|slug| !slug.trim().is_empty()) {
            Some(explicit) => PageSlug::new(explicit)?,
            None => self.slug_service.derive(&title)?,
        };
        self.slug_service.ensure_available(&slug, None).await?;

        let parent_id = command.parent_id.map(PageId::existing).transpose()?;
        if let Some(parent_id) = parent_id {
            self.ensure_parent(parent_id, None).await?;
        }
        let template = command
            .template
            .map(PageTemplate::new)
            .transpose()?
            .unwrap_or_default();

        let now = self.clock.now();
        let status = command.status.unwrap_or_default();
        let new_page = NewPage {
            title,
            slug,
            content: PageContent::new(command.content.unwrap_or_default()),
            excerpt: command.excerpt.unwrap_or_default(),
            featured_image_id: command.featured_image_id.map(MediaId::new).transpose()?,
            template,
            parent_id,
            author_id: actor.id,
            status,
            published_at: (status == PageStatus::Published).then_some(now),
            scheduled_at: command.scheduled_at,
            created_at: now,
        };

        let created = self.write_repo.insert(new_page).await?;
        tracing::info!(page_id = %created.id, slug = %created.slug, actor_id = i64::from(actor.id), "page created");
        self.present(created).await
    }
}
