// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{PublicPageDto, PublicPageSummaryDto},
    queries::public::GetPublishedPageQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/public/pages",
    responses(
        (status = 200, description = "Published pages, newest first.", body = [PublicPageSummaryDto])
    ),
    security(()),
    tag = "Public"
)]
pub async fn list_published_pages(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublicPageSummaryDto>>> {
    state
        .services
        .public_pages
        .list_published()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/public/pages/{slug}",
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Published page with its visible modules.", body = PublicPageDto),
        (status = 404, description = "No published page with this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn get_published_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicPageDto>> {
    state
        .services
        .public_pages
        .get_published_by_slug(GetPublishedPageQuery { slug })
        .await
        .into_http()
        .map(Json)
}
