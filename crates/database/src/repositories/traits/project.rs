//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::query::ProjectQuery;
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目计数（可带过滤条件）
/// - 项目分页查询
/// - 项目查询
/// - 项目创建
/// - 项目更新
/// - 项目删除
///
/// 查询不到记录时返回 `None`，而不是错误
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 统计满足过滤条件的项目总数
    ///
    /// 只使用 [`ProjectQuery`] 中的过滤条件，忽略分页参数
    async fn count_projects(&self, query: &ProjectQuery) -> DatabaseResult<u64>;

    /// 分页查询项目
    ///
    /// 最多返回 `limit` 条记录，从 `offset` 开始，按 `id` 排序
    async fn find_projects(&self, query: &ProjectQuery) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 根据 ID 获取项目信息
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Option<ProjectInfo>>;

    /// 创建新项目，返回带有新 `id` 的项目信息
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 更新项目信息，项目不存在时返回 `None`
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>>;

    /// 删除项目，返回是否真的删除了记录
    async fn delete_project(&self, id: i32) -> DatabaseResult<bool>;
}
