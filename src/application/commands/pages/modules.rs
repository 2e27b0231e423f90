use super::PageCommandService;
use crate::{
    application::{
        capability::{PAGES, ensure_capability},
        dto::{AuthenticatedUser, PageModuleDto},
        error::ApplicationResult,
    },
    domain::page::{ModuleId, NewPageModule, PageId, PageModuleUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct AddModuleCommand {
    pub page_id: i64,
    pub module_type: String,
    pub content: Option<String>,
    pub settings: Option<String>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateModuleCommand {
    pub page_id: i64,
    pub module_id: i64,
    pub module_type: Option<String>,
    pub content: Option<String>,
    pub settings: Option<Option<String>>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
}

pub struct RemoveModuleCommand {
    pub page_id: i64,
    pub module_id: i64,
}

// Module edits do not create revisions; the next content edit captures them.
impl PageCommandService {
    pub async fn add_module(
        &self,
        actor: &AuthenticatedUser,
        command: AddModuleCommand,
    ) -> ApplicationResult<PageModuleDto> {
        ensure_capability(actor, PAGES, "update")?;
        let page_id = PageId::existing(command.page_id)?;
        self.load_page(page_id).await?;

        let mut module = NewPageModule::new(page_id, command.module_type, self.clock.now())?;
        module.content = command.content.unwrap_or_default();
        module.settings = command.settings;
        if let Some(sort_order) = command.sort_order {
            module.sort_order = sort_order;
        }
        if let Some(is_visible) = command.is_visible {
            module.is_visible = is_visible;
        }

        let created = self.module_repo.insert(module).await?;
        tracing::debug!(page_id = %page_id, module_id = %created.id, "module added");
        Ok(created.into())
    }

    pub async fn update_module(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateModuleCommand,
    ) -> ApplicationResult<PageModuleDto> {
        ensure_capability(actor, PAGES, "update")?;
        let page_id = PageId::existing(command.page_id)?;
        let module_id = ModuleId::existing(command.module_id)?;
        self.load_page(page_id).await?;

        let mut update = PageModuleUpdate::new(module_id, page_id, self.clock.now());
        if let Some(module_type) = command.module_type {
            update = update.with_module_type(module_type)?;
        }
        update.content = command.content;
        update.settings = command.settings;
        update.sort_order = command.sort_order;
        update.is_visible = command.is_visible;

        let updated = self.module_repo.update(update).await?;
        Ok(updated.into())
    }

    pub async fn remove_module(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveModuleCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, PAGES, "update")?;
        let page_id = PageId::existing(command.page_id)?;
        let module_id = ModuleId::existing(command.module_id)?;
        self.load_page(page_id).await?;

        self.module_repo.delete(page_id, module_id).await?;
        tracing::debug!(page_id = %page_id, module_id = %module_id, "module removed");
        Ok(())
    }
}
