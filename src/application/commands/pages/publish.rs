use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::page::{PageId, PageUpdate, RevisionPolicy},
};

pub struct PublishPageCommand {
    pub id: i64,
}

pub struct UnpublishPageCommand {
    pub id: i64,
}

impl PageCommandService {
    /// Republishing keeps the original `published_at`.
    pub async fn publish_page(
        &self,
        actor: &AuthenticatedUser,
        command: PublishPageCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "publish")?;
        let id = PageId::existing(command.id)?;
        let mut page = self.load_page(id).await?;

        page.publish(self.clock.now());
        let mut update = PageUpdate::new(id, page.updated_at).with_status(page.status);
        update.first_published_at = page.published_at;

        let updated = self.write_repo.update(update, RevisionPolicy::Skip).await?;
        tracing::info!(page_id = %id, actor_id = i64::from(actor.id), "page published");
        self.present(updated).await
    }

    /// Back to draft; `published_at` is left as the record of the first publish.
    pub async fn unpublish_page(
        &self,
        actor: &AuthenticatedUser,
        command: UnpublishPageCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "publish")?;
        let id = PageId::existing(command.id)?;
        let mut page = self.load_page(id).await?;

        page.unpublish(self.clock.now());
        let update = PageUpdate::new(id, page.updated_at).with_status(page.status);

        let updated = self.write_repo.update(update, RevisionPolicy::Skip).await?;
        tracing::info!(page_id = %id, actor_id = i64::from(actor.id), "page unpublished");
        self.present(updated).await
    }
}
