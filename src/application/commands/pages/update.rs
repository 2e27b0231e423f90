use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::{
        MediaId, PageContent, PageId, PageSlug, PageStatus, PageTemplate, PageTitle, PageUpdate,
        RevisionPolicy,
    },
};
use chrono::{DateTime, Utc};

/// Patch request: `None` leaves a field untouched. For nullable fields
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub template: Option<String>,
    pub status: Option<PageStatus>,
    pub parent_id: Option<Option<i64>>,
    pub featured_image_id: Option<Option<i64>>,
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
}

impl PageCommandService {
    /// Content edits snapshot the pre-update content and modules first.
    pub async fn update_page(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePageCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "update")?;

        let id = PageId::existing(command.id)?;
        let page = self.load_page(id).await?;
        let mut update = PageUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(PageTitle::new(title)?);
        }

        if let Some(slug) = command.slug {
            let slug = PageSlug::new(slug)?;
            if slug != page.slug {
                self.slug_service.ensure_available(&slug, Some(id)).await?;
            }
            update = update.with_slug(slug);
        }

        if let Some(content) = command.content {
            update = update.with_content(PageContent::new(content));
        }
        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(excerpt);
        }
        if let Some(template) = command.template {
            update = update.with_template(PageTemplate::new(template)?);
        }
        if let Some(status) = command.status {
            update = update.with_status(status);
        }

        if let Some(parent_id) = command.parent_id {
            let parent_id = parent_id.map(PageId::existing).transpose()?;
            if let Some(parent_id) = parent_id {
                self.ensure_parent(parent_id, Some(id)).await?;
            }
            update = update.with_parent(parent_id);
        }
        if let Some(featured_image_id) = command.featured_image_id {
            update = update.with_featured_image(featured_image_id.map(MediaId::new).transpose()?);
        }
        if let Some(scheduled_at) = command.scheduled_at {
            update = update.with_scheduled_at(scheduled_at);
        }

        let policy = RevisionPolicy::OnContentChange {
            author_id: actor.id,
        };
        let updated = self.write_repo.update(update, policy).await?;
        tracing::info!(page_id = %id, actor_id = i64::from(actor.id), "page updated");
        self.present(updated).await
    }
}
