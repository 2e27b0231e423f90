use super::error::map_sqlx;
use super::sqlite_module::fetch_modules;
use super::sqlite_revision::insert_revision;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    MediaId, NewPage, Page, PageContent, PageFilter, PageId, PageReadRepository, PageSlug,
    PageStatus, PageTemplate, PageTitle, PageUpdate, PageWriteRepository, RevisionPolicy,
    RevisionSnapshot,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

macro_rules! page_columns {
    () => {
        "id, title, slug, content, excerpt, featured_image_id, template, parent_id, author_id, \
         status, published_at, scheduled_at, created_at, updated_at"
    };
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    featured_image_id: Option<i64>,
    template: String,
    parent_id: Option<i64>,
    author_id: i64,
    status: String,
    published_at: Option<DateTime<Utc>>,
    scheduled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: PageTitle::new(row.title)?,
            slug: PageSlug::new(row.slug)?,
            content: PageContent::new(row.content),
            excerpt: row.excerpt,
            featured_image_id: row.featured_image_id.map(MediaId::new).transpose()?,
            template: PageTemplate::new(row.template)?,
            parent_id: row.parent_id.map(PageId::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            status: row.status.parse::<PageStatus>()?,
            published_at: row.published_at,
            scheduled_at: row.scheduled_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_pages(rows: Vec<PageRow>) -> DomainResult<Vec<Page>> {
    rows.into_iter().map(Page::try_from).collect()
}

async fn fetch_page(conn: &mut SqliteConnection, id: PageId) -> DomainResult<Option<Page>> {
    let row = sqlx::query_as::<_, PageRow>(concat!(
        "SELECT ",
        page_columns!(),
        " FROM pages WHERE id = ?"
    ))
    .bind(i64::from(id))
    .fetch_optional(conn)
    .await
    .map_err(map_sqlx)?;

    row.map(Page::try_from).transpose()
}

fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[derive(Clone)]
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageWriteRepository for SqlitePageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            content,
            excerpt,
            featured_image_id,
            template,
            parent_id,
            author_id,
            status,
            published_at,
            scheduled_at,
            created_at,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(concat!(
            "INSERT INTO pages (title, slug, content, excerpt, featured_image_id, template, \
             parent_id, author_id, status, published_at, scheduled_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING ",
            page_columns!()
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt)
        .bind(featured_image_id.map(i64::from))
        .bind(template.as_str())
        .bind(parent_id.map(i64::from))
        .bind(i64::from(author_id))
        .bind(status.as_str())
        .bind(published_at)
        .bind(scheduled_at)
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate, policy: RevisionPolicy) -> DomainResult<Page> {
        // Take the write lock up front so concurrent writers wait on the busy
        // timeout instead of failing when the read snapshot goes stale.
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(map_sqlx)?;

        let current = fetch_page(&mut tx, update.id)
            .await?
            .ok_or_else(|| DomainError::not_found("page not found"))?;

        if let Some(author_id) = policy.requires_snapshot(&current, update.content.as_ref()) {
            let modules = fetch_modules(&mut tx, current.id).await?;
            let snapshot =
                RevisionSnapshot::capture(&current, &modules, author_id, update.updated_at);
            let revision_id = insert_revision(&mut tx, &snapshot).await?;
            tracing::debug!(page_id = %current.id, revision_id = %revision_id, "revision captured");
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE pages SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(title) = &update.title {
            builder.push(", title = ").push_bind(title.as_str());
        }
        if let Some(slug) = &update.slug {
            builder.push(", slug = ").push_bind(slug.as_str());
        }
        if let Some(content) = &update.content {
            builder.push(", content = ").push_bind(content.as_str());
        }
        if let Some(excerpt) = &update.excerpt {
            builder.push(", excerpt = ").push_bind(excerpt.as_str());
        }
        if let Some(template) = &update.template {
            builder.push(", template = ").push_bind(template.as_str());
        }
        if let Some(status) = update.status {
            builder.push(", status = ").push_bind(status.as_str());
        }
        if let Some(parent_id) = update.parent_id {
            builder
                .push(", parent_id = ")
                .push_bind(parent_id.map(i64::from));
        }
        if let Some(featured_image_id) = update.featured_image_id {
            builder
                .push(", featured_image_id = ")
                .push_bind(featured_image_id.map(i64::from));
        }
        if let Some(scheduled_at) = update.scheduled_at {
            builder.push(", scheduled_at = ").push_bind(scheduled_at);
        }
        if let Some(first_published_at) = update.first_published_at {
            builder
                .push(", published_at = COALESCE(published_at, ")
                .push_bind(first_published_at)
                .push(")");
        }
        builder.push(" WHERE id = ").push_bind(i64::from(update.id));
        builder.push(concat!(" RETURNING ", page_columns!()));

        let row = builder
            .build_query_as::<PageRow>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Page::try_from(row)
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("page not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for SqlitePageRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_page(&mut conn, id).await
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(concat!(
            "SELECT ",
            page_columns!(),
            " FROM pages WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_published_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(concat!(
            "SELECT ",
            page_columns!(),
            " FROM pages WHERE slug = ? AND status = 'published'"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self, filter: &PageFilter) -> DomainResult<Vec<Page>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(concat!("SELECT ", page_columns!(), " FROM pages WHERE 1 = 1"));

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(template) = filter.template.as_deref() {
            builder.push(" AND template = ").push_bind(template);
        }
        if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = like_pattern(term);
            builder
                .push(" AND (lower(title) LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR lower(slug) LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }
        builder.push(" ORDER BY updated_at DESC, id DESC");

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_pages(rows)
    }

    async fn list_published(&self) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(concat!(
            "SELECT ",
            page_columns!(),
            " FROM pages WHERE status = 'published' ORDER BY published_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_pages(rows)
    }
}
