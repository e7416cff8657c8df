//! 项目查询构建
//!
//! 根据可选的名称过滤条件和分页参数生成计数SQL与数据SQL。
//!
//! ## 参数编号
//!
//! PostgreSQL 的占位符按顺序编号，过滤条件存在时占用 `$1`，
//! 分页参数依次排在后面：
//!
//! | 过滤条件 | 计数SQL参数 | 数据SQL参数 |
//! |---|---|---|
//! | 无 | 无 | `LIMIT $1 OFFSET $2` |
//! | 有 | `$1` | `$1`, `LIMIT $2 OFFSET $3` |

use crate::{DatabaseError, DatabaseResult};

const SELECT_COUNT: &str = "SELECT COUNT(*) FROM projects";
const SELECT_DATA: &str = "SELECT id, name, description FROM projects";

/// 一次分页查询的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    search: Option<String>,
    page: u32,
    limit: u32,
}

impl ProjectQuery {
    /// 创建查询
    ///
    /// - `search` 为空字符串（或只有空白）时等同于不过滤
    /// - `page` 与 `limit` 必须大于0，否则返回 [`DatabaseError::InvalidArgument`]
    pub fn new(search: Option<String>, page: u32, limit: u32) -> DatabaseResult<Self> {
        if page == 0 {
            return Err(DatabaseError::invalid_argument("page must be at least 1"));
        }
        if limit == 0 {
            return Err(DatabaseError::invalid_argument("limit must be at least 1"));
        }

        let search = search.filter(|s| !s.trim().is_empty());
        Ok(Self { search, page, limit })
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// 跳过的行数 `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
    }

    /// `ILIKE` 使用的匹配模式
    ///
    /// 用户输入中的 `%`、`_`、`\` 会被转义，保证按字面子串匹配
    pub fn pattern(&self) -> Option<String> {
        self.search.as_deref().map(|s| format!("%{}%", escape_like(s)))
    }

    fn where_clause(&self) -> &'static str {
        if self.search.is_some() {
            r" WHERE name ILIKE $1 ESCAPE '\'"
        } else {
            ""
        }
    }

    /// 计数SQL
    pub fn count_sql(&self) -> String {
        format!("{SELECT_COUNT}{}", self.where_clause())
    }

    /// 数据SQL，`ORDER BY id` 保证翻页时顺序稳定
    pub fn data_sql(&self) -> String {
        let first = if self.search.is_some() { 2 } else { 1 };
        format!(
            "{SELECT_DATA}{} ORDER BY id LIMIT ${} OFFSET ${}",
            self.where_clause(),
            first,
            first + 1
        )
    }

    /// 在内存中判断名称是否满足过滤条件（不区分大小写的子串匹配）
    pub fn matches(&self, name: &str) -> bool {
        match &self.search {
            None => true,
            Some(search) => name.to_lowercase().contains(&search.to_lowercase()),
        }
    }
}

/// 总页数：`total / limit` 向上取整
///
/// `limit` 为0时没有意义，直接返回 [`DatabaseError::InvalidArgument`]
pub fn total_pages(total: u64, limit: u32) -> DatabaseResult<u64> {
    if limit == 0 {
        return Err(DatabaseError::invalid_argument("limit must be at least 1"));
    }
    Ok(total.div_ceil(u64::from(limit)))
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10).unwrap(), 0);
        assert_eq!(total_pages(1, 10).unwrap(), 1);
        assert_eq!(total_pages(10, 10).unwrap(), 1);
        assert_eq!(total_pages(11, 10).unwrap(), 2);
        assert_eq!(total_pages(7, 1).unwrap(), 7);

        for limit in 1..=12u32 {
            for total in 0..=50u64 {
                let expected = (total as f64 / limit as f64).ceil() as u64;
                assert_eq!(total_pages(total, limit).unwrap(), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn total_pages_rejects_zero_limit() {
        assert!(matches!(total_pages(5, 0), Err(DatabaseError::InvalidArgument(_))));
    }

    #[test]
    fn zero_page_or_limit_is_invalid() {
        assert!(matches!(ProjectQuery::new(None, 0, 10), Err(DatabaseError::InvalidArgument(_))));
        assert!(matches!(ProjectQuery::new(None, 1, 0), Err(DatabaseError::InvalidArgument(_))));
    }

    #[test]
    fn offset_follows_page() {
        assert_eq!(ProjectQuery::new(None, 1, 10).unwrap().offset(), 0);
        assert_eq!(ProjectQuery::new(None, 3, 10).unwrap().offset(), 20);
        assert_eq!(ProjectQuery::new(None, u32::MAX, u32::MAX).unwrap().offset(), i64::MAX);
    }

    #[test]
    fn empty_search_means_no_filter() {
        let query = ProjectQuery::new(Some(String::new()), 1, 10).unwrap();
        assert_eq!(query.search(), None);
        assert_eq!(query.pattern(), None);
        assert_eq!(query, ProjectQuery::new(None, 1, 10).unwrap());
        assert!(ProjectQuery::new(Some("   ".into()), 1, 10).unwrap().search().is_none());
    }

    #[test]
    fn unfiltered_sql_numbers_pagination_from_one() {
        let query = ProjectQuery::new(None, 2, 5).unwrap();
        assert_eq!(query.count_sql(), "SELECT COUNT(*) FROM projects");
        assert_eq!(
            query.data_sql(),
            "SELECT id, name, description FROM projects ORDER BY id LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn filtered_sql_shifts_pagination_parameters() {
        let query = ProjectQuery::new(Some("Alpha".into()), 1, 10).unwrap();
        assert_eq!(query.count_sql(), r"SELECT COUNT(*) FROM projects WHERE name ILIKE $1 ESCAPE '\'");
        assert_eq!(
            query.data_sql(),
            r"SELECT id, name, description FROM projects WHERE name ILIKE $1 ESCAPE '\' ORDER BY id LIMIT $2 OFFSET $3"
        );
        assert_eq!(query.pattern().as_deref(), Some("%Alpha%"));
    }

    #[test]
    fn pattern_escapes_like_wildcards() {
        let query = ProjectQuery::new(Some(r"50%_a\b".into()), 1, 10).unwrap();
        assert_eq!(query.pattern().as_deref(), Some(r"%50\%\_a\\b%"));
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let query = ProjectQuery::new(Some("alp".into()), 1, 10).unwrap();
        assert!(query.matches("Project Alpha"));
        assert!(query.matches("ALPINE"));
        assert!(!query.matches("Project Beta"));
        assert!(ProjectQuery::new(None, 1, 10).unwrap().matches("anything"));
    }

    #[test]
    fn percent_is_matched_literally() {
        let query = ProjectQuery::new(Some("%".into()), 1, 10).unwrap();
        assert!(query.matches("100% done"));
        assert!(!query.matches("done"));
    }
}
