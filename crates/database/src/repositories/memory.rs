//! 内存项目仓库
//!
//! 与 [`ProjectRepository`](crate::ProjectRepository) 行为一致的内存实现，
//! 用于测试以及不需要数据库的场景。过滤与分页规则都来自 [`ProjectQuery`]。

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::query::ProjectQuery;
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct MemoryState {
    rows: BTreeMap<i32, ProjectInfo>,
    // 只增不减，删除后的 id 不会被复用
    next_id: i32,
}

/// 内存项目仓库
#[derive(Debug)]
pub struct MemoryProjectRepository {
    state: RwLock<MemoryState>,
}

impl Default for MemoryProjectRepository {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryProjectRepository {
    /// 使用给定的 `(name, description)` 初始化，id 从1开始依次分配
    pub fn with_projects<I, N, D>(projects: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut rows = BTreeMap::new();
        let mut next_id = 1;
        for (name, description) in projects {
            rows.insert(
                next_id,
                ProjectInfo {
                    id: next_id,
                    name: name.into(),
                    description: description.into(),
                },
            );
            next_id += 1;
        }

        Self {
            state: RwLock::new(MemoryState { rows, next_id }),
        }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryProjectRepository {
    async fn count_projects(&self, query: &ProjectQuery) -> DatabaseResult<u64> {
        let state = self.state.read().await;
        Ok(state.rows.values().filter(|p| query.matches(&p.name)).count() as u64)
    }

    async fn find_projects(&self, query: &ProjectQuery) -> DatabaseResult<Vec<ProjectInfo>> {
        let state = self.state.read().await;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);

        Ok(state
            .rows
            .values()
            .filter(|p| query.matches(&p.name))
            .skip(offset)
            .take(query.limit() as usize)
            .cloned()
            .collect())
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<Option<ProjectInfo>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let info = ProjectInfo {
            id,
            name: project.name,
            description: project.description,
        };
        state.rows.insert(id, info.clone());

        debug!("✅ 内存项目创建成功: {}", id);
        Ok(info)
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>> {
        let mut state = self.state.write().await;
        Ok(state.rows.get_mut(&id).map(|row| {
            row.name = update.name;
            row.description = update.description;
            row.clone()
        }))
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repository() -> MemoryProjectRepository {
        MemoryProjectRepository::with_projects([
            ("Project Alpha", "A React project."),
            ("Project Beta", "A scalable solution for modern problems"),
            ("alpine tools", "Utilities"),
        ])
    }

    #[tokio::test]
    async fn search_filters_count_and_data() {
        let repo = repository();
        let query = ProjectQuery::new(Some("ALP".into()), 1, 10).unwrap();

        assert_eq!(repo.count_projects(&query).await.unwrap(), 2);
        let ids: Vec<i32> = repo.find_projects(&query).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn pages_never_exceed_limit() {
        let repo = MemoryProjectRepository::with_projects((1..=7).map(|i| (format!("p{i}"), "d")));

        for page in 1..=4 {
            let query = ProjectQuery::new(None, page, 3).unwrap();
            let rows = repo.find_projects(&query).await.unwrap();
            assert!(rows.len() <= 3);
            if let Some(first) = rows.first() {
                assert_eq!(first.id, (page as i32 - 1) * 3 + 1);
            }
        }
        let last = repo.find_projects(&ProjectQuery::new(None, 3, 3).unwrap()).await.unwrap();
        assert_eq!(last.len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repository();
        assert!(repo.delete_project(3).await.unwrap());
        assert!(!repo.delete_project(3).await.unwrap());

        let created = repo
            .create_project(ProjectCreate {
                name: "Gamma".into(),
                description: "New".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(repo.get_project_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_missing_project_returns_none() {
        let repo = repository();
        let update = ProjectUpdate {
            name: "x".into(),
            description: "y".into(),
        };
        assert_eq!(repo.update_project(42, update.clone()).await.unwrap(), None);

        let updated = repo.update_project(1, update).await.unwrap().unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "x");
    }
}
