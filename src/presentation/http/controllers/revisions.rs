// src/presentation/http/controllers/revisions.rs
use crate::application::{
    commands::pages::RestoreRevisionCommand,
    dto::{PageDto, PageRevisionDto},
    queries::pages::{GetRevisionQuery, ListRevisionsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/pages/{id}/revisions",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Revisions, newest first.", body = [PageRevisionDto]),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn list_revisions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(page_id): Path<i64>,
) -> HttpResult<Json<Vec<PageRevisionDto>>> {
    state
        .services
        .page_queries
        .list_revisions(&user, ListRevisionsQuery { page_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{id}/revisions/{revision_id}",
    params(
        ("id" = i64, Path, description = "Page id"),
        ("revision_id" = i64, Path, description = "Revision id")
    ),
    responses(
        (status = 200, description = "The revision.", body = PageRevisionDto),
        (status = 404, description = "No such revision on this page.", body = ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn get_revision(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, revision_id)): Path<(i64, i64)>,
) -> HttpResult<Json<PageRevisionDto>> {
    state
        .services
        .page_queries
        .get_revision(
            &user,
            GetRevisionQuery {
                page_id,
                revision_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages/{id}/revisions/{revision_id}/restore",
    params(
        ("id" = i64, Path, description = "Page id"),
        ("revision_id" = i64, Path, description = "Revision id")
    ),
    responses(
        (status = 200, description = "Page with the revision's content.", body = PageDto),
        (status = 404, description = "No such revision on this page.", body = ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn restore_revision(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, revision_id)): Path<(i64, i64)>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_commands
        .restore_revision(
            &user,
            RestoreRevisionCommand {
                page_id,
                revision_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}
