// src/presentation/http/controllers/pages.rs
use super::double_option;
use crate::application::{
    commands::pages::{
        CreatePageCommand, DeletePageCommand, DuplicatePageCommand, PublishPageCommand,
        UnpublishPageCommand, UpdatePageCommand,
    },
    dto::PageDto,
    queries::pages::{GetPageQuery, ListPagesQuery},
};
use crate::domain::page::PageStatus;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageListParams {
    pub status: Option<PageStatus>,
    pub template: Option<String>,
    /// Substring of the title or slug.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub featured_image_id: Option<i64>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Omitted fields are left unchanged; `null` clears the nullable ones.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub template: Option<String>,
    pub status: Option<PageStatus>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub parent_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub featured_image_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/pages",
    params(PageListParams),
    responses(
        (status = 200, description = "Pages, most recently updated first.", body = [PageDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageListParams>,
) -> HttpResult<Json<Vec<PageDto>>> {
    let query = ListPagesQuery {
        status: params.status,
        template: params.template,
        search: params.search,
    };

    state
        .services
        .page_queries
        .list_pages(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 201, description = "Page created.", body = PageDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let command = CreatePageCommand {
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        template: payload.template,
        status: payload.status,
        parent_id: payload.parent_id,
        featured_image_id: payload.featured_image_id,
        scheduled_at: payload.scheduled_at,
    };

    let page = state
        .services
        .page_commands
        .create_page(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "The page.", body = PageDto),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page(&user, GetPageQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page id")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Updated page; a content change records a revision first.", body = PageDto),
        (status = 404, description = "No such page.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        template: payload.template,
        status: payload.status,
        parent_id: payload.parent_id,
        featured_image_id: payload.featured_image_id,
        scheduled_at: payload.scheduled_at,
    };

    state
        .services
        .page_commands
        .update_page(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page, modules and revisions removed."),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .page_commands
        .delete_page(&user, DeletePageCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}/publish",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Published page.", body = PageDto),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn publish_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_commands
        .publish_page(&user, PublishPageCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}/unpublish",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page returned to draft.", body = PageDto),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn unpublish_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_commands
        .unpublish_page(&user, UnpublishPageCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages/{id}/duplicate",
    params(("id" = i64, Path, description = "Source page id")),
    responses(
        (status = 201, description = "Draft copy created.", body = PageDto),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn duplicate_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let page = state
        .services
        .page_commands
        .duplicate_page(&user, DuplicatePageCommand { id })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(page)))
}
