use crate::controller::SearchState;
use shared_lib::Project;

/// 首次加载时显示的占位行数
pub const PLACEHOLDER_ROWS: usize = 3;

/// 列表的展示方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// 首次加载中，显示占位行
    Placeholder(usize),
    /// 搜索过但没有结果
    NoResults,
    /// 从未搜索过，项目列表为空
    Empty,
    /// 每个项目一行
    Rows(Vec<Project>),
}

impl ListView {
    pub fn from_state(state: &SearchState) -> Self {
        if state.loading {
            ListView::Placeholder(PLACEHOLDER_ROWS)
        } else if state.projects.is_empty() && state.has_searched_ever {
            ListView::NoResults
        } else if state.projects.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(state.projects.clone())
        }
    }

    /// 空列表时显示的文字
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListView::NoResults => Some("No projects found"),
            ListView::Empty => Some("Empty projects"),
            _ => None,
        }
    }
}

impl From<&SearchState> for ListView {
    fn from(state: &SearchState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project() -> Project {
        Project {
            id: 1,
            name: "Project Alpha".into(),
            description: "A React project.".into(),
        }
    }

    #[test]
    fn loading_shows_placeholders_even_with_stale_rows() {
        let state = SearchState {
            loading: true,
            projects: vec![project()],
            ..Default::default()
        };
        assert_eq!(ListView::from_state(&state), ListView::Placeholder(3));
    }

    #[test]
    fn empty_list_depends_on_search_history() {
        let never = SearchState::default();
        assert_eq!(ListView::from_state(&never), ListView::Empty);
        assert_eq!(ListView::from_state(&never).message(), Some("Empty projects"));

        let searched = SearchState {
            has_searched_ever: true,
            ..Default::default()
        };
        assert_eq!(ListView::from_state(&searched), ListView::NoResults);
        assert_eq!(ListView::from(&searched).message(), Some("No projects found"));
    }

    #[test]
    fn rows_render_one_per_project() {
        let state = SearchState {
            has_searched_ever: true,
            projects: vec![project()],
            ..Default::default()
        };
        assert_eq!(ListView::from_state(&state), ListView::Rows(vec![project()]));
        assert_eq!(ListView::from_state(&state).message(), None);
    }
}
