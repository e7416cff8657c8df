use serde::Deserialize;
use utoipa::IntoParams;

/// 默认页数
pub const DEFAULT_PAGE: u32 = 1;

/// 默认每页大小
pub const DEFAULT_LIMIT: u32 = 10;

/// 项目列表的查询参数
///
/// 参数都按字符串接收，缺失、非数字或不大于0时使用默认值，
/// 这样 `?page=abc` 不会被当成错误请求。
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    #[param(value_type = Option<u32>, example = 1)]
    /// 分页查询的开始页数，默认1
    pub page: Option<String>,

    #[param(value_type = Option<u32>, example = 10)]
    /// 分页查询的每页大小，默认10，超过上限时截断
    pub limit: Option<String>,

    #[param(example = "alpha")]
    /// 按名称搜索（不区分大小写的子串匹配），空字符串表示不过滤
    pub s: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }

    pub fn search(&self) -> Option<String> {
        self.s.clone().filter(|s| !s.is_empty())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).filter(|v| *v > 0)
}
