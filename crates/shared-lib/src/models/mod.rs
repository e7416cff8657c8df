//! 接口数据结构
//!
//! 服务端序列化、客户端反序列化使用同一套定义，保证两边的 JSON 格式一致

pub mod common;
pub mod project;

// 重新导出具体的类型
pub use common::{ErrorReply, PageMeta, ReplyList};
pub use project::Project;
