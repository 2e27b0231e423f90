use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{PageId, PageUpdate, RevisionId, RevisionPolicy},
};

pub struct RestoreRevisionCommand {
    pub page_id: i64,
    pub revision_id: i64,
}

impl PageCommandService {
    /// Roll the page content back to a revision. The current state is
    /// snapshotted first. Title, slug, status and modules stay as they are.
    pub async fn restore_revision(
        &self,
        actor: &AuthenticatedUser,
        command: RestoreRevisionCommand,
    ) -> ApplicationResult<PageDto> {
        ensure_capability(actor, PAGES, "update")?;
        let page_id = PageId::existing(command.page_id)?;
        let revision_id = RevisionId::existing(command.revision_id)?;

        self.load_page(page_id).await?;
        let revision = self
            .revision_repo
            .find_for_page(page_id, revision_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("revision not found"))?;

        let update = PageUpdate::new(page_id, self.clock.now()).with_content(revision.content);
        let policy = RevisionPolicy::Always {
            author_id: actor.id,
        };
        let restored = self.write_repo.update(update, policy).await?;

        tracing::info!(
            page_id = %page_id,
            revision_id = %revision_id,
            actor_id = i64::from(actor.id),
            "revision restored"
        );
        self.present(restored).await
    }
}
