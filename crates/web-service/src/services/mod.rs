//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，路由只负责参数解析与结果转换

pub mod project;

pub use project::ProjectService;
