use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    ModuleId, NewPageModule, PageId, PageModule, PageModuleRepository, PageModuleUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

macro_rules! module_columns {
    () => {
        "id, page_id, module_type, content, settings, sort_order, is_visible, created_at, updated_at"
    };
}

#[derive(Debug, FromRow)]
struct ModuleRow {
    id: i64,
    page_id: i64,
    module_type: String,
    content: String,
    settings: Option<String>,
    sort_order: i64,
    is_visible: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ModuleRow> for PageModule {
    type Error = DomainError;

    fn try_from(row: ModuleRow) -> Result<Self, Self::Error> {
        Ok(PageModule {
            id: ModuleId::new(row.id)?,
            page_id: PageId::new(row.page_id)?,
            module_type: row.module_type,
            content: row.content,
            settings: row.settings,
            sort_order: row.sort_order,
            is_visible: row.is_visible,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Modules of a page ordered by sort key, then id. Shared with the page
/// repository so snapshots read inside its transaction.
pub(super) async fn fetch_modules(
    conn: &mut SqliteConnection,
    page_id: PageId,
) -> DomainResult<Vec<PageModule>> {
    let rows = sqlx::query_as::<_, ModuleRow>(concat!(
        "SELECT ",
        module_columns!(),
        " FROM page_modules WHERE page_id = ? ORDER BY sort_order ASC, id ASC"
    ))
    .bind(i64::from(page_id))
    .fetch_all(conn)
    .await
    .map_err(map_sqlx)?;

    rows.into_iter().map(PageModule::try_from).collect()
}

#[derive(Clone)]
pub struct SqliteModuleRepository {
    pool: SqlitePool,
}

impl SqliteModuleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageModuleRepository for SqliteModuleRepository {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageModule>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_modules(&mut conn, page_id).await
    }

    async fn insert(&self, module: NewPageModule) -> DomainResult<PageModule> {
        let row = sqlx::query_as::<_, ModuleRow>(concat!(
            "INSERT INTO page_modules (page_id, module_type, content, settings, sort_order, \
             is_visible, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING ",
            module_columns!()
        ))
        .bind(i64::from(module.page_id))
        .bind(module.module_type)
        .bind(module.content)
        .bind(module.settings)
        .bind(module.sort_order)
        .bind(module.is_visible)
        .bind(module.created_at)
        .bind(module.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PageModule::try_from(row)
    }

    async fn update(&self, update: PageModuleUpdate) -> DomainResult<PageModule> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE page_modules SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(module_type) = &update.module_type {
            builder.push(", module_type = ").push_bind(module_type.as_str());
        }
        if let Some(content) = &update.content {
            builder.push(", content = ").push_bind(content.as_str());
        }
        if let Some(settings) = &update.settings {
            builder.push(", settings = ").push_bind(settings.as_deref());
        }
        if let Some(sort_order) = update.sort_order {
            builder.push(", sort_order = ").push_bind(sort_order);
        }
        if let Some(is_visible) = update.is_visible {
            builder.push(", is_visible = ").push_bind(is_visible);
        }
        builder
            .push(" WHERE id = ")
            .push_bind(i64::from(update.id))
            .push(" AND page_id = ")
            .push_bind(i64::from(update.page_id));
        builder.push(concat!(" RETURNING ", module_columns!()));

        let row = builder
            .build_query_as::<ModuleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("module not found"))?;

        PageModule::try_from(row)
    }

    async fn delete(&self, page_id: PageId, id: ModuleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM page_modules WHERE id = ? AND page_id = ?")
            .bind(i64::from(id))
            .bind(i64::from(page_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("module not found"));
        }
        Ok(())
    }
}
