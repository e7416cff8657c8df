//! 项目搜索客户端
//!
//! 对应前端的项目列表：首次加载全部项目，搜索框输入经过防抖后再请求，
//! 并且只接受最新一次请求的结果。
//!
//! - [`ProjectFetcher`]：获取项目列表的接口，[`HttpProjectFetcher`] 是基于 `reqwest` 的实现
//! - [`SearchController`]：防抖与过期响应处理
//! - [`ListView`]：根据状态得出的列表展示方式

pub mod controller;
pub mod error;
pub mod fetcher;
pub mod view;

pub use controller::{SearchController, SearchState, DEFAULT_DEBOUNCE};
pub use error::ClientError;
pub use fetcher::{HttpProjectFetcher, ProjectFetcher};
pub use view::{ListView, PLACEHOLDER_ROWS};
