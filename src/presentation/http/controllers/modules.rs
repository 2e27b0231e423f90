// src/presentation/http/controllers/modules.rs
use super::double_option;
use crate::application::{
    commands::pages::{AddModuleCommand, RemoveModuleCommand, UpdateModuleCommand},
    dto::PageModuleDto,
    queries::pages::ListModulesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddModuleRequest {
    pub module_type: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub settings: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateModuleRequest {
    pub module_type: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub settings: Option<Option<String>>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{id}/modules",
    params(("id" = i64, Path, description = "Page id")),
    responses(
        (status = 200, description = "Modules in display order.", body = [PageModuleDto]),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn list_modules(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(page_id): Path<i64>,
) -> HttpResult<Json<Vec<PageModuleDto>>> {
    state
        .services
        .page_queries
        .list_modules(&user, ListModulesQuery { page_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages/{id}/modules",
    params(("id" = i64, Path, description = "Page id")),
    request_body = AddModuleRequest,
    responses(
        (status = 201, description = "Module attached.", body = PageModuleDto),
        (status = 404, description = "No such page.", body = ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn add_module(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(page_id): Path<i64>,
    Json(payload): Json<AddModuleRequest>,
) -> HttpResult<(StatusCode, Json<PageModuleDto>)> {
    let command = AddModuleCommand {
        page_id,
        module_type: payload.module_type,
        content: payload.content,
        settings: payload.settings,
        sort_order: payload.sort_order,
        is_visible: payload.is_visible,
    };

    let module = state
        .services
        .page_commands
        .add_module(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(module)))
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}/modules/{module_id}",
    params(
        ("id" = i64, Path, description = "Page id"),
        ("module_id" = i64, Path, description = "Module id")
    ),
    request_body = UpdateModuleRequest,
    responses(
        (status = 200, description = "Updated module.", body = PageModuleDto),
        (status = 404, description = "No such module on this page.", body = ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn update_module(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, module_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateModuleRequest>,
) -> HttpResult<Json<PageModuleDto>> {
    let command = UpdateModuleCommand {
        page_id,
        module_id,
        module_type: payload.module_type,
        content: payload.content,
        settings: payload.settings,
        sort_order: payload.sort_order,
        is_visible: payload.is_visible,
    };

    state
        .services
        .page_commands
        .update_module(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/pages/{id}/modules/{module_id}",
    params(
        ("id" = i64, Path, description = "Page id"),
        ("module_id" = i64, Path, description = "Module id")
    ),
    responses(
        (status = 200, description = "Module removed."),
        (status = 404, description = "No such module on this page.", body = ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn remove_module(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((page_id, module_id)): Path<(i64, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .page_commands
        .remove_module(&user, RemoveModuleCommand { page_id, module_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
