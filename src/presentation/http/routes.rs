// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, modules, pages, public, revisions},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route(
            "/api/v1/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/api/v1/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/api/v1/pages/{id}/publish", put(pages::publish_page))
        .route("/api/v1/pages/{id}/unpublish", put(pages::unpublish_page))
        .route("/api/v1/pages/{id}/duplicate", post(pages::duplicate_page))
        .route(
            "/api/v1/pages/{id}/revisions",
            get(revisions::list_revisions),
        )
        .route(
            "/api/v1/pages/{id}/revisions/{revision_id}",
            get(revisions::get_revision),
        )
        .route(
            "/api/v1/pages/{id}/revisions/{revision_id}/restore",
            post(revisions::restore_revision),
        )
        .route(
            "/api/v1/pages/{id}/modules",
            get(modules::list_modules).post(modules::add_module),
        )
        .route(
            "/api/v1/pages/{id}/modules/{module_id}",
            put(modules::update_module).delete(modules::remove_module),
        )
        .route("/api/v1/public/pages", get(public::list_published_pages))
        .route(
            "/api/v1/public/pages/{slug}",
            get(public::get_published_page),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
