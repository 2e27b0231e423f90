use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::page::PageId,
};

pub struct DeletePageCommand {
    pub id: i64,
}

impl PageCommandService {
    pub async fn delete_page(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePageCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, PAGES, "delete")?;
        let id = PageId::existing(command.id)?;
        let page = self.load_page(id).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(page_id = %id, slug = %page.slug, actor_id = i64::from(actor.id), "page deleted");
        Ok(())
    }
}
