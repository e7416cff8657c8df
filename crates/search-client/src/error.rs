use reqwest::StatusCode;
use thiserror::Error;

/// 客户端请求错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// 网络错误或响应无法解析
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 服务端返回了非2xx状态码
    #[error("服务端返回错误状态: {0}")]
    Status(StatusCode),

    /// 服务地址不合法
    #[error("无效的服务地址: {0}")]
    InvalidUrl(String),
}
