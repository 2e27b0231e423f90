// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::presentation::http::controllers::{auth, modules, pages, public, revisions};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::profile,
        pages::list_pages,
        pages::create_page,
        pages::get_page,
        pages::update_page,
        pages::delete_page,
        pages::publish_page,
        pages::unpublish_page,
        pages::duplicate_page,
        revisions::list_revisions,
        revisions::get_revision,
        revisions::restore_revision,
        modules::list_modules,
        modules::add_module,
        modules::update_module,
        modules::remove_module,
        public::list_published_pages,
        public::get_published_page,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            pages::CreatePageRequest,
            pages::UpdatePageRequest,
            modules::AddModuleRequest,
            modules::UpdateModuleRequest,
            crate::domain::page::PageStatus,
            crate::domain::user::Role,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::PageDto,
            crate::application::dto::PageRevisionDto,
            crate::application::dto::ModuleSnapshotDto,
            crate::application::dto::PageModuleDto,
            crate::application::dto::PublicPageDto,
            crate::application::dto::PublicPageSummaryDto
        )
    ),
    tags(
        (name = "Auth", description = "Login and current identity"),
        (name = "Pages", description = "Page management"),
        (name = "Revisions", description = "Page history and restore"),
        (name = "Modules", description = "Content blocks attached to pages"),
        (name = "Public", description = "Published pages for anonymous readers"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Pagewright API",
        description = "Page store with revision history",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
