//! 搜索控制器
//!
//! ## 状态变化
//!
//! 1. 首次加载：请求不带过滤条件的第一页，与搜索无关，只执行一次
//! 2. 输入：立即更新 `search_text`，标记 `is_searching` 和 `has_searched_ever`，不发请求
//! 3. 防抖结束：`debounce` 时间内没有新的输入时，用最新的输入发起请求，
//!    返回后替换列表并清除 `is_searching`
//! 4. 过期响应：每个请求从同一个递增计数器领取令牌，只有令牌仍是最新的响应才能修改状态
//!
//! 进行中的请求不会被取消，所以第4条是保证结果正确的前提。

use crate::fetcher::ProjectFetcher;
use crate::view::ListView;
use shared_lib::Project;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error};

/// 默认的防抖时间
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1200);

/// 控制器状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// 当前输入，`None` 表示从未输入过
    pub search_text: Option<String>,

    /// 防抖后真正用于请求的输入
    pub debounced_query: Option<String>,

    /// 从输入开始到对应的响应返回之前为 `true`
    pub is_searching: bool,

    /// 一旦输入过就一直为 `true`，空列表显示为“没有结果”
    pub has_searched_ever: bool,

    /// 首次加载进行中
    pub loading: bool,

    /// 当前展示的项目
    pub projects: Vec<Project>,
}

impl SearchState {
    /// 搜索框旁边的加载提示
    pub fn show_spinner(&self) -> bool {
        self.is_searching
    }
}

struct Inner<F> {
    fetcher: F,
    debounce: Duration,
    state: watch::Sender<SearchState>,
    initial_started: AtomicBool,
    // 每次输入加一，防抖结束时不相等说明有更新的输入
    keystrokes: AtomicU64,
    // 每次请求加一，响应返回时不相等说明已过期
    requests: AtomicU64,
}

impl<F: ProjectFetcher> Inner<F> {
    fn next_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest_request(&self, token: u64) -> bool {
        self.requests.load(Ordering::SeqCst) == token
    }

    async fn search(&self, keystroke: u64) {
        let query = self.state.borrow().search_text.clone().unwrap_or_default();
        let token = self.next_request();
        self.state.send_modify(|s| s.debounced_query = Some(query.clone()));

        debug!("🔍 搜索项目 {:?} (请求 {})", query, token);
        let search = Some(query.as_str()).filter(|q| !q.is_empty());
        let result = self.fetcher.fetch_projects(search).await;

        self.state.send_modify(|s| {
            if !self.is_latest_request(token) {
                debug!("丢弃过期的搜索结果 {:?} (请求 {})", query, token);
                return;
            }
            if self.keystrokes.load(Ordering::SeqCst) == keystroke {
                s.is_searching = false;
            }
            match result {
                Ok(projects) => s.projects = projects,
                Err(err) => error!("❌ 搜索项目失败: {err}"),
            }
        });
    }
}

/// 项目列表的搜索控制器
///
/// 状态保存在 [`watch`] 通道中，可以通过 [`SearchController::subscribe`] 监听变化。
/// [`SearchController::input`] 会启动防抖任务，需要在 tokio 运行时中调用。
pub struct SearchController<F> {
    inner: Arc<Inner<F>>,
}

impl<F> Clone for SearchController<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<F: ProjectFetcher> SearchController<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_debounce(fetcher, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(fetcher: F, debounce: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(Inner {
                fetcher,
                debounce,
                state,
                initial_started: AtomicBool::new(false),
                keystrokes: AtomicU64::new(0),
                requests: AtomicU64::new(0),
            }),
        }
    }

    /// 当前状态的快照
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// 根据当前状态得出的列表展示方式
    pub fn view(&self) -> ListView {
        ListView::from_state(&self.inner.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// 首次加载，重复调用直接返回
    pub async fn load_initial(&self) {
        if self.inner.initial_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let token = self.inner.next_request();
        self.inner.state.send_modify(|s| s.loading = true);

        let result = self.inner.fetcher.fetch_projects(None).await;

        self.inner.state.send_modify(|s| {
            s.loading = false;
            match result {
                Ok(projects) if self.inner.is_latest_request(token) => s.projects = projects,
                Ok(_) => debug!("丢弃过期的首次加载结果 (请求 {})", token),
                Err(err) => error!("❌ 获取项目失败: {err}"),
            }
        });
    }

    /// 搜索框输入
    ///
    /// 立即更新状态，`debounce` 之后没有新的输入才会发起请求
    pub fn input(&self, text: impl Into<String>) {
        let text = text.into();
        let keystroke = self.inner.keystrokes.fetch_add(1, Ordering::SeqCst) + 1;

        self.inner.state.send_modify(|s| {
            s.search_text = Some(text);
            s.is_searching = true;
            s.has_searched_ever = true;
        });

        let inner = self.inner.clone();
        tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            if inner.keystrokes.load(Ordering::SeqCst) != keystroke {
                return;
            }
            inner.search(keystroke).await;
        });
    }
}
