//! 🔧 共享库模块
//!
//! 这个模块包含了在服务端与客户端之间共享的通用代码，包括：
//! - 程序配置
//! - 接口的 JSON 数据结构

pub mod config;
pub mod models;

// 重新导出常用类型
pub use config::{AppConfig, DatabaseConfig};
pub use models::{ErrorReply, PageMeta, Project, ReplyList};
