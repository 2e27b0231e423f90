use crate::domain::page::{ModuleSnapshot, Page, PageModule, PageRevision, PageStatus};
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display fields joined from the author's account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorView {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<&User> for AuthorView {
    fn from(user: &User) -> Self {
        Self {
            name: Some(user.display_name().to_string()),
            email: Some(user.email.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image_id: Option<i64>,
    pub template: String,
    pub parent_id: Option<i64>,
    pub author_id: i64,
    pub status: PageStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl PageDto {
    pub fn from_parts(page: Page, author: AuthorView) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            content: page.content.into_inner(),
            excerpt: page.excerpt,
            featured_image_id: page.featured_image_id.map(Into::into),
            template: page.template.into_inner(),
            parent_id: page.parent_id.map(Into::into),
            author_id: page.author_id.into(),
            status: page.status,
            published_at: page.published_at,
            scheduled_at: page.scheduled_at,
            created_at: page.created_at,
            updated_at: page.updated_at,
            author_name: author.name,
            author_email: author.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuleSnapshotDto {
    pub id: i64,
    pub module_type: String,
    pub content: String,
    pub settings: Option<String>,
    pub sort_order: i64,
    pub is_visible: bool,
}

impl From<ModuleSnapshot> for ModuleSnapshotDto {
    fn from(snapshot: ModuleSnapshot) -> Self {
        Self {
            id: snapshot.id,
            module_type: snapshot.module_type,
            content: snapshot.content,
            settings: snapshot.settings,
            sort_order: snapshot.sort_order,
            is_visible: snapshot.is_visible,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageRevisionDto {
    pub id: i64,
    pub page_id: i64,
    pub content: String,
    pub modules: Vec<ModuleSnapshotDto>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl PageRevisionDto {
    pub fn from_parts(revision: PageRevision, author: AuthorView) -> Self {
        Self {
            id: revision.id.into(),
            page_id: revision.page_id.into(),
            content: revision.content.into_inner(),
            modules: revision.modules.into_iter().map(Into::into).collect(),
            author_id: revision.author_id.into(),
            created_at: revision.created_at,
            author_name: author.name,
            author_email: author.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageModuleDto {
    pub id: i64,
    pub page_id: i64,
    pub module_type: String,
    pub content: String,
    pub settings: Option<String>,
    pub sort_order: i64,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PageModule> for PageModuleDto {
    fn from(module: PageModule) -> Self {
        Self {
            id: module.id.into(),
            page_id: module.page_id.into(),
            module_type: module.module_type,
            content: module.content,
            settings: module.settings,
            sort_order: module.sort_order,
            is_visible: module.is_visible,
            created_at: module.created_at,
            updated_at: module.updated_at,
        }
    }
}

/// Entry of the public page index.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicPageSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub template: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
}

impl PublicPageSummaryDto {
    pub fn from_parts(page: Page, author: AuthorView) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            excerpt: page.excerpt,
            template: page.template.into_inner(),
            published_at: page.published_at,
            author_name: author.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicPageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub template: String,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub modules: Vec<PageModuleDto>,
}

impl PublicPageDto {
    /// Only visible modules are rendered publicly.
    pub fn from_parts(page: Page, author: AuthorView, modules: Vec<PageModule>) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            content: page.content.into_inner(),
            excerpt: page.excerpt,
            template: page.template.into_inner(),
            published_at: page.published_at,
            updated_at: page.updated_at,
            author_name: author.name,
            author_email: author.email,
            modules: modules
                .into_iter()
                .filter(|module| module.is_visible)
                .map(Into::into)
                .collect(),
        }
    }
}
