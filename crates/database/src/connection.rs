use crate::{DatabaseError, DatabaseResult};
use shared_lib::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 数据库为空时写入的示例项目
const SEED_PROJECTS: [(&str, &str); 2] = [
    ("Project Alpha", "A React project."),
    ("Project Beta", "A scalable solution for modern problems"),
];

/// 创建数据库连接池、执行迁移并写入示例数据（一站式函数）
///
/// 连接池在程序退出前需要调用 [`Pool::close`] 释放
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<DatabasePool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.name);

    // 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        // 1小时空闲则释放
        .idle_timeout(Duration::from_secs(3600))
        // 6小时强制释放，避免长时间链接导致数据库问题
        .max_lifetime(Duration::from_secs(3600 * 6))
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功");

    info!("🔄 开始执行数据库迁移...");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库迁移完成");

    seed_projects(&pool).await?;

    Ok(pool)
}

/// 表为空时写入示例项目
async fn seed_projects(pool: &DatabasePool) -> DatabaseResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for (name, description) in SEED_PROJECTS {
        sqlx::query("INSERT INTO projects (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(pool)
            .await?;
    }

    info!("🌱 写入 {} 个示例项目", SEED_PROJECTS.len());
    Ok(())
}
