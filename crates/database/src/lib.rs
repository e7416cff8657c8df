//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询构建以及项目仓库等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
pub use query::{total_pages, ProjectQuery};
pub use repositories::{memory::MemoryProjectRepository, project::ProjectRepository, traits::ProjectRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
