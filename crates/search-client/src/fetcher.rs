//! 项目列表的获取接口

use crate::error::ClientError;
use reqwest::{Client, Url};
use shared_lib::{Project, ReplyList};
use std::sync::Arc;
use tracing::debug;

/// 获取项目列表
///
/// `search` 为 `None` 时不过滤，返回第一页
#[async_trait::async_trait]
pub trait ProjectFetcher: Send + Sync + 'static {
    async fn fetch_projects(&self, search: Option<&str>) -> Result<Vec<Project>, ClientError>;
}

#[async_trait::async_trait]
impl<T: ProjectFetcher + ?Sized> ProjectFetcher for Arc<T> {
    async fn fetch_projects(&self, search: Option<&str>) -> Result<Vec<Project>, ClientError> {
        (**self).fetch_projects(search).await
    }
}

/// 通过 HTTP 接口 `GET /api/projects` 获取项目
#[derive(Debug, Clone)]
pub struct HttpProjectFetcher {
    client: Client,
    projects_url: Url,
}

impl HttpProjectFetcher {
    /// `base_url` 是服务地址，例如 `http://localhost:3000`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let projects_url = Url::parse(base_url)
            .and_then(|url| url.join("/api/projects"))
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, projects_url })
    }

    /// 构造请求地址，搜索内容为空时不带 `s` 参数
    pub fn request_url(&self, search: Option<&str>) -> Url {
        let mut url = self.projects_url.clone();
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("s", search);
        }
        url
    }
}

#[async_trait::async_trait]
impl ProjectFetcher for HttpProjectFetcher {
    async fn fetch_projects(&self, search: Option<&str>) -> Result<Vec<Project>, ClientError> {
        let url = self.request_url(search);
        debug!("📡 请求项目列表 {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let page: ReplyList<Project> = response.json().await?;
        Ok(page.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_parameter_is_only_sent_when_present() {
        let fetcher = HttpProjectFetcher::new("http://localhost:3000").unwrap();
        assert_eq!(fetcher.request_url(None).as_str(), "http://localhost:3000/api/projects");
        assert_eq!(fetcher.request_url(Some("")).as_str(), "http://localhost:3000/api/projects");
        assert_eq!(
            fetcher.request_url(Some("Alpha")).as_str(),
            "http://localhost:3000/api/projects?s=Alpha"
        );
        assert_eq!(
            fetcher.request_url(Some("a&b")).as_str(),
            "http://localhost:3000/api/projects?s=a%26b"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpProjectFetcher::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
