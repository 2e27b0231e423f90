use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::value_objects::{ModuleId, PageId};
use chrono::{DateTime, Utc};

/// A content block owned by exactly one page.
#[derive(Debug, Clone)]
pub struct PageModule {
    pub id: ModuleId,
    pub page_id: PageId,
    pub module_type: String,
    pub content: String,
    pub settings: Option<String>,
    pub sort_order: i64,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPageModule {
    pub page_id: PageId,
    pub module_type: String,
    pub content: String,
    pub settings: Option<String>,
    pub sort_order: i64,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

impl NewPageModule {
    pub fn new(
        page_id: PageId,
        module_type: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            page_id,
            module_type: validate_module_type(module_type.into())?,
            content: String::new(),
            settings: None,
            sort_order: 0,
            is_visible: true,
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PageModuleUpdate {
    pub id: ModuleId,
    pub page_id: PageId,
    pub module_type: Option<String>,
    pub content: Option<String>,
    pub settings: Option<Option<String>>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PageModuleUpdate {
    pub fn new(id: ModuleId, page_id: PageId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            page_id,
            module_type: None,
            content: None,
            settings: None,
            sort_order: None,
            is_visible: None,
            updated_at,
        }
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> DomainResult<Self> {
        self.module_type = Some(validate_module_type(module_type.into())?);
        Ok(self)
    }

    pub fn apply_to(&self, module: &mut PageModule) {
        if let Some(module_type) = &self.module_type {
            module.module_type = module_type.clone();
        }
        if let Some(content) = &self.content {
            module.content = content.clone();
        }
        if let Some(settings) = &self.settings {
            module.settings = settings.clone();
        }
        if let Some(sort_order) = self.sort_order {
            module.sort_order = sort_order;
        }
        if let Some(is_visible) = self.is_visible {
            module.is_visible = is_visible;
        }
        module.updated_at = self.updated_at;
    }
}

fn validate_module_type(value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation("module type is required".into()));
    }
    Ok(value)
}
