use color_eyre::Result;
use database::{initialize_database, ProjectRepository, ProjectRepositoryTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 默认info级别，可通过 RUST_LOG 调整
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    let pool = initialize_database(&config.database).await?;
    let repository: Arc<dyn ProjectRepositoryTrait> = Arc::new(ProjectRepository::new(pool.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(web_service::start_web_service(config.clone(), repository, shutdown_rx));

    let stopped_by_itself = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            false
        }
        // 服务自己退出（例如端口被占用）时直接返回错误
        result = &mut server => {
            result??;
            true
        }
    };

    if !stopped_by_itself {
        info!("收到退出信号");
        shutdown_tx.send(true)?;
        server.await??;
    }

    pool.close().await;
    info!("🗄️ 数据库连接池已关闭");

    Ok(())
}
