//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use shared_lib::Project;

/// 项目信息结构体，对应 `projects` 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// 项目创建参数
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub description: String,
}

/// 项目更新参数
///
/// 更新会整体替换 `name` 和 `description`，`id` 保持不变
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
}

impl From<ProjectInfo> for Project {
    fn from(info: ProjectInfo) -> Self {
        Project {
            id: info.id,
            name: info.name,
            description: info.description,
        }
    }
}
