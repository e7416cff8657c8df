//! Web服务模块
//!
//! 提供项目管理的 HTTP API 接口和文档服务

use color_eyre::Result;
use database::ProjectRepositoryTrait;
use shared_lib::AppConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::ProjectService;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub project_service: ProjectService,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProjectRepositoryTrait>, max_page_limit: u32) -> Self {
        Self {
            project_service: ProjectService::new(repository, max_page_limit),
        }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的通知后停止接收新请求，等待处理中的请求完成后返回
pub async fn start_web_service(
    config: Arc<AppConfig>,
    repository: Arc<dyn ProjectRepositoryTrait>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let shared_state = AppState::new(repository, config.max_page_limit);
    let router = routes::create_app_router(shared_state, &config.client_url)?;

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
