//! 项目相关接口
//!

use crate::models::common::ListQuery;
use crate::models::err::AppError;
use crate::models::projects::ProjectPayload;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use shared_lib::{ErrorReply, Project, ReplyList};
use tracing::debug;
use validator::Validate;

/// 根据查询参数搜索项目
///
/// 根据查询参数搜索符合要求的项目列表，支持分页.
///
/// 查询参数由 [`ListQuery`] 决定，所有参数都是可选的：
///
/// - `page`: 默认1
/// - `limit`: 默认10，超过配置的上限时截断
/// - `s`: 按名称搜索，不区分大小写
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    params(ListQuery),
    responses(
        (status = 200, description = "Search results", body = ReplyList<Project>),
        (status = 500, description = "Store fault", body = ErrorReply)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ReplyList<Project>>, AppError> {
    debug!("🔍 搜索项目 {:?}", query);

    let result = state
        .project_service
        .list(query.search(), query.page(), query.limit())
        .await?;

    Ok(Json(result))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 400, description = "Invalid id", body = ErrorReply),
        (status = 404, description = "Project not found", body = ErrorReply)
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    project_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Project>, AppError> {
    let Path(project_id) = project_id?;
    debug!("Getting project id {}", project_id);

    let project = state
        .project_service
        .get(project_id)
        .await?
        .ok_or_else(|| not_found(project_id))?;

    Ok(Json(project))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，`name` 与 `description` 都不能为空
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Created project", body = Project),
        (status = 400, description = "Validation failed", body = ErrorReply)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let Json(payload) = payload?;
    debug!("Creating project {:#?}", payload);

    let payload = payload.normalized();
    payload.validate()?;

    let project = state.project_service.create(payload.name, payload.description).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// 更新项目信息
///
/// 根据用户指定的 `id` 整体替换 `name` 和 `description`。
#[utoipa::path(put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Validation failed", body = ErrorReply),
        (status = 404, description = "Project not found", body = ErrorReply)
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    project_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let Path(project_id) = project_id?;
    let Json(payload) = payload?;
    debug!("Updating project {} with {:#?}", project_id, payload);

    let payload = payload.normalized();
    payload.validate()?;

    let project = state
        .project_service
        .update(project_id, payload.name, payload.description)
        .await?
        .ok_or_else(|| not_found(project_id))?;

    Ok(Json(project))
}

/// 删除指定的项目
///
/// 项目不存在时同样返回204
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = ErrorReply)
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    project_id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(project_id) = project_id?;
    debug!("delete project {}", project_id);

    let deleted = state.project_service.delete(project_id).await?;
    if !deleted {
        debug!("project {} did not exist", project_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

fn not_found(project_id: i32) -> AppError {
    AppError::NotFound(format!("Project {project_id} not found"))
}
