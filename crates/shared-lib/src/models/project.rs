use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 项目信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[schema(example = 1)]
    /// 项目ID，由数据库分配
    pub id: i32,

    #[schema(example = "Project Alpha")]
    /// 项目名称
    pub name: String,

    #[schema(example = "A React project.")]
    /// 项目描述
    pub description: String,
}
