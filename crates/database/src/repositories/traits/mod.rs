//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：同一个仓库实例会被多个请求在不同线程中并发使用
//! - `'static`：仓库存放在 axum 的共享状态中，生命周期与服务一致
//!
//! Web 层通过 `Arc<dyn ProjectRepositoryTrait>` 持有仓库，
//! 启动时注入 PostgreSQL 实现，测试时注入内存实现：
//!
//! ```rust,ignore
//! let repository: Arc<dyn ProjectRepositoryTrait> = Arc::new(ProjectRepository::new(pool));
//! let repository: Arc<dyn ProjectRepositoryTrait> = Arc::new(MemoryProjectRepository::default());
//! ```

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
