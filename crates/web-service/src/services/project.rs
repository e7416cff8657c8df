//! 项目服务
//!
//! 提供项目相关的业务逻辑操作

use database::{total_pages, DatabaseResult, ProjectCreate, ProjectQuery, ProjectRepositoryTrait, ProjectUpdate};
use shared_lib::{PageMeta, Project, ReplyList};
use std::sync::Arc;
use tracing::instrument;

/// 项目服务
///
/// 持有注入的项目仓库，启动时使用 PostgreSQL 实现，测试时可以替换为内存实现
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
    max_page_limit: u32,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepositoryTrait>, max_page_limit: u32) -> Self {
        Self {
            repository,
            max_page_limit,
        }
    }

    /// 分页搜索项目
    ///
    /// `limit` 超过 `max_page_limit` 时截断，返回的 `meta.limit` 是实际使用的值
    #[instrument(skip(self))]
    pub async fn list(&self, search: Option<String>, page: u32, limit: u32) -> DatabaseResult<ReplyList<Project>> {
        let limit = limit.min(self.max_page_limit);
        let query = ProjectQuery::new(search, page, limit)?;

        let total = self.repository.count_projects(&query).await?;
        let projects = self.repository.find_projects(&query).await?;

        Ok(ReplyList {
            data: projects.into_iter().map(Into::into).collect(),
            meta: PageMeta {
                total,
                page,
                limit,
                total_pages: total_pages(total, limit)?,
            },
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> DatabaseResult<Option<Project>> {
        Ok(self.repository.get_project_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: String, description: String) -> DatabaseResult<Project> {
        let created = self.repository.create_project(ProjectCreate { name, description }).await?;
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, name: String, description: String) -> DatabaseResult<Option<Project>> {
        let updated = self
            .repository
            .update_project(id, ProjectUpdate { name, description })
            .await?;
        Ok(updated.map(Into::into))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        self.repository.delete_project(id).await
    }
}
