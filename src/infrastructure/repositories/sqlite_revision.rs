use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    ModuleSnapshot, NewPageRevision, PageContent, PageId, PageRevision, PageRevisionRepository,
    RevisionId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

#[derive(Debug, FromRow)]
struct RevisionRow {
    id: i64,
    page_id: i64,
    content: String,
    modules: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<RevisionRow> for PageRevision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        Ok(PageRevision {
            id: RevisionId::new(row.id)?,
            page_id: PageId::new(row.page_id)?,
            content: PageContent::new(row.content),
            modules: ModuleSnapshot::decode_all(&row.modules)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

/// Append a snapshot on the caller's connection, normally inside the
/// transaction that applies the page update.
pub(super) async fn insert_revision(
    conn: &mut SqliteConnection,
    revision: &NewPageRevision,
) -> DomainResult<RevisionId> {
    let modules = ModuleSnapshot::encode_all(&revision.modules)?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO page_revisions (page_id, content, modules, author_id, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(i64::from(revision.page_id))
    .bind(revision.content.as_str())
    .bind(modules)
    .bind(i64::from(revision.author_id))
    .bind(revision.created_at)
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)?;

    RevisionId::new(id)
}

#[derive(Clone)]
pub struct SqliteRevisionRepository {
    pool: SqlitePool,
}

impl SqliteRevisionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRevisionRepository for SqliteRevisionRepository {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageRevision>> {
        let rows = sqlx::query_as::<_, RevisionRow>(
            r#"
            SELECT id, page_id, content, modules, author_id, created_at
            FROM page_revisions
            WHERE page_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(i64::from(page_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PageRevision::try_from).collect()
    }

    async fn find_for_page(
        &self,
        page_id: PageId,
        id: RevisionId,
    ) -> DomainResult<Option<PageRevision>> {
        let row = sqlx::query_as::<_, RevisionRow>(
            r#"
            SELECT id, page_id, content, modules, author_id, created_at
            FROM page_revisions
            WHERE id = ? AND page_id = ?
            "#,
        )
        .bind(i64::from(id))
        .bind(i64::from(page_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PageRevision::try_from).transpose()
    }
}
