//! 项目仓库
//!
//! 负责项目相关的 PostgreSQL 数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::query::ProjectQuery;
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn count_projects(&self, query: &ProjectQuery) -> DatabaseResult<u64> {
        let sql = query.count_sql();
        debug!("🔢 统计项目 - 名称: {:?}", query.search());

        let mut count = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(pattern) = query.pattern() {
            count = count.bind(pattern);
        }
        let total = count.fetch_one(&self.pool).await?;

        Ok(total.max(0) as u64)
    }

    /// 根据查询参数搜索项目
    ///
    /// SQL 由 [`ProjectQuery::data_sql`] 生成，过滤条件存在时先绑定匹配模式，
    /// 再依次绑定 `limit` 和 `offset`，与占位符编号保持一致。
    async fn find_projects(&self, query: &ProjectQuery) -> DatabaseResult<Vec<ProjectInfo>> {
        let sql = query.data_sql();
        debug!(
            "🔍 搜索项目 - 名称: {:?}, 页面大小: {}, 偏移量: {}",
            query.search(),
            query.limit(),
            query.offset()
        );

        let mut rows = sqlx::query_as::<_, ProjectInfo>(&sql);
        if let Some(pattern) = query.pattern() {
            rows = rows.bind(pattern);
        }
        let projects = rows
            .bind(i64::from(query.limit()))
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 搜索完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Option<ProjectInfo>> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, name, description
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let project_info = sqlx::query_as::<_, ProjectInfo>(
            r#"
            INSERT INTO projects (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(project.name)
        .bind(project.description)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: {:#?}", project_info);
        Ok(project_info)
    }

    /// 更新项目信息
    ///
    /// 整体替换 `name` 和 `description`，`RETURNING` 为空说明 `id` 不存在。
    /// 并发更新同一个项目时以最后一次写入为准。
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            UPDATE projects
            SET name = $1,
                description = $2
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(update.name)
        .bind(update.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<bool> {
        debug!("🗑️ 删除项目: {}", id);

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
