use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::{NewPage, PageId, PageStatus},
};

/// Attempts before a lost slug race is reported as a conflict.
const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct DuplicatePageCommand {
    pub id: i64,
}

impl PageCommandService {
    /// Copy a page into a new draft titled "<title> (Copy)" under the first
    /// free slug derived from that title. The actor becomes the author.
    pub async fn duplicate_page(
        &self,
        actor: &AuthenticatedUser,
        command: DuplicatePageCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "create")?;
        let source = self.load_page(PageId::existing(command.id)?).await?;

        let title = source.title.copy_of();
        let base = self.slug_service.derive(&title)?;

        let mut attempt = 1;
        loop {
            let slug = self.slug_service.next_free(&base).await?;
            let now = self.clock.now();
            let copy = NewPage {
                title: title.clone(),
                slug,
                content: source.content.clone(),
                excerpt: source.excerpt.clone(),
                featured_image_id: source.featured_image_id,
                template: source.template.clone(),
                parent_id: source.parent_id,
                author_id: actor.id,
                status: PageStatus::Draft,
                published_at: None,
                scheduled_at: None,
                created_at: now,
            };

            match self.write_repo.insert(copy).await {
                Ok(created) => {
                    tracing::info!(
                        page_id = %created.id,
                        source_id = %source.id,
                        slug = %created.slug,
                        actor_id = i64::from(actor.id),
                        "page duplicated"
                    );
                    return self.present(created).await;
                }
                Err(err) if err.is_conflict() && attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(source_id = %source.id, attempt, "duplicate slug taken concurrently, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
