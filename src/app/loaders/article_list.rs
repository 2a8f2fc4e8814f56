use super::into_article_list;
use crate::core::endpoints::Endpoints;
use crate::core::{Article, ArticleListPage, Backend, ConfigProvider, Digest, PageLoader};
use crate::domain::model::{ARTICLES_LOAD_FAILED_PREFIX, ARTICLES_UNAVAILABLE};
use crate::utils::error::{LoaderError, Result};

/// 首頁的 loader：文章列表，加上可選的 digest
pub struct ArticleListLoader<B: Backend> {
    backend: B,
    endpoints: Endpoints,
    include_digest: bool,
    skip: Option<usize>,
    limit: Option<usize>,
}

impl<B: Backend> ArticleListLoader<B> {
    pub fn new(backend: B, endpoints: Endpoints) -> Self {
        Self {
            backend,
            endpoints,
            include_digest: false,
            skip: None,
            limit: None,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(backend: B, config: &C) -> Result<Self> {
        let endpoints = Endpoints::new(config.backend_url())?;
        Ok(Self::new(backend, endpoints)
            .with_digest(config.include_digest())
            .with_window(config.article_skip(), config.article_limit()))
    }

    pub fn with_digest(mut self, include_digest: bool) -> Self {
        self.include_digest = include_digest;
        self
    }

    pub fn with_window(mut self, skip: Option<usize>, limit: Option<usize>) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }

    pub fn includes_digest(&self) -> bool {
        self.include_digest
    }

    /// digest 只是附加資料，任何失敗都吞掉並回傳 `None`
    async fn fetch_digest(&self) -> Option<Digest> {
        let url = self.endpoints.digest();
        match self.backend.get(&url).await {
            Ok(response) if response.is_success() => match response.json() {
                Ok(digest) => Some(digest).filter(|d| !d.is_null()),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable digest from {}: {}", url, e);
                    None
                }
            },
            Ok(response) => {
                tracing::debug!("Digest not available yet (status {})", response.status);
                None
            }
            Err(e) => {
                tracing::debug!("Digest not available yet: {}", e);
                None
            }
        }
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let url = self.endpoints.articles(self.skip, self.limit);
        let response = self.backend.get(&url).await?;

        if !response.is_success() {
            return Err(LoaderError::StatusError {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }

        into_article_list(&url, response.json()?)
    }
}

#[async_trait::async_trait]
impl<B: Backend> PageLoader for ArticleListLoader<B> {
    type Params = ();
    type Output = ArticleListPage;

    async fn load(&self, _params: &()) -> ArticleListPage {
        let digest = if self.include_digest {
            Some(self.fetch_digest().await)
        } else {
            None
        };

        match self.fetch_articles().await {
            Ok(articles) => {
                tracing::debug!("Loaded {} articles", articles.len());
                ArticleListPage::loaded(articles, digest)
            }
            Err(e) if e.is_soft() => {
                tracing::error!("API response not OK: {}", e);
                // 已取得的 digest 保留下來
                ArticleListPage::failed(digest, ARTICLES_UNAVAILABLE)
            }
            Err(e) => {
                tracing::error!("Error loading articles: {}", e);
                ArticleListPage::failed(
                    digest.map(|_| None),
                    format!("{}: {}", ARTICLES_LOAD_FAILED_PREFIX, e.describe()),
                )
            }
        }
    }
}
