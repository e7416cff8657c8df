//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::__path_update_project;
use crate::routes::projects::{create_project, delete_project, get_project, list_projects, update_project};
use crate::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use color_eyre::eyre::Context;
use color_eyre::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod projects;

/// 导出当前App的所有路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，
/// 所以列表/创建与单个项目的操作拆开定义。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .routes(routes!(get_project, update_project, delete_project))
        .with_state(state)
}

/// 只允许配置的前端地址跨域访问
fn cors_layer(client_url: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(client_url).with_context(|| format!("Invalid CLIENT_URL {client_url:?}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档，用户可通过 `/docs` 访问
/// - 生成App路由，所有接口都在 `/api` 下
/// - 跨域与请求日志中间件
pub fn create_app_router(shared_state: AppState, client_url: &str) -> Result<Router> {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "项目的分页搜索与增删改查")
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    Ok(router
        .merge(Scalar::with_url("/docs", api))
        .layer(cors_layer(client_url)?)
        .layer(TraceLayer::new_for_http()))
}
