use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 分页信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[schema(example = 146)]
    /// 符合条件的总数
    pub total: u64,

    #[schema(example = 1)]
    /// 当前页数，从1开始
    pub page: u32,

    #[schema(example = 10)]
    /// 每页大小
    pub limit: u32,

    #[schema(example = 15)]
    /// 总页数
    pub total_pages: u64,
}

/// 分页列表返回对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReplyList<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// 错误返回对象
///
/// `error` 可以是一段文字，也可以是按字段分组的校验错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorReply {
    #[schema(value_type = Object)]
    pub error: serde_json::Value,
}

impl ErrorReply {
    pub fn message<S: Into<String>>(msg: S) -> Self {
        Self {
            error: serde_json::Value::String(msg.into()),
        }
    }
}
