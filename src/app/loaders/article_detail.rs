use super::into_article_list;
use crate::core::endpoints::{Endpoints, DEFAULT_RELATED_LIMIT};
use crate::core::{Article, ArticlePage, Backend, ConfigProvider, PageLoader};
use crate::domain::model::{ARTICLE_NOT_FOUND, ARTICLE_UNAVAILABLE};
use crate::utils::error::{LoaderError, Result};

/// 文章頁的 loader：單篇文章，加上可選的相關文章
pub struct ArticleDetailLoader<B: Backend> {
    backend: B,
    endpoints: Endpoints,
    include_related: bool,
    related_limit: usize,
}

impl<B: Backend> ArticleDetailLoader<B> {
    pub fn new(backend: B, endpoints: Endpoints) -> Self {
        Self {
            backend,
            endpoints,
            include_related: false,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(backend: B, config: &C) -> Result<Self> {
        let endpoints = Endpoints::new(config.backend_url())?;
        Ok(Self::new(backend, endpoints).with_related(config.include_related(), config.related_limit()))
    }

    pub fn with_related(mut self, include_related: bool, limit: usize) -> Self {
        self.include_related = include_related;
        self.related_limit = limit;
        self
    }

    pub fn includes_related(&self) -> bool {
        self.include_related
    }

    async fn fetch_article(&self, id: &str) -> Result<Article> {
        let url = self.endpoints.article(id)?;
        let response = self.backend.get(&url).await?;

        if !response.is_success() {
            return Err(LoaderError::StatusError {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }

        response.json()
    }

    async fn fetch_related(&self, id: &str) -> Result<Vec<Article>> {
        let url = self.endpoints.related(id, self.related_limit)?;
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
impl<B: Backend> PageLoader for ArticleDetailLoader<B> {
    type Params = str;
    type Output = ArticlePage;

    async fn load(&self, id: &str) -> ArticlePage {
        let article = match self.fetch_article(id).await {
            Ok(article) => article,
            Err(e) if e.is_soft() => {
                tracing::debug!("Article {:?} not found: {}", id, e);
                return ArticlePage::failed(self.include_related, ARTICLE_NOT_FOUND);
            }
            Err(e) => {
                tracing::error!("Error loading article {:?}: {}", id, e);
                return ArticlePage::failed(self.include_related, ARTICLE_UNAVAILABLE);
            }
        };

        if !self.include_related {
            return ArticlePage::loaded(article, None);
        }

        let related = self.fetch_related(id).await.unwrap_or_else(|e| {
            tracing::warn!("Related articles for {:?} unavailable: {}", id, e);
            Vec::new()
        });

        ArticlePage::loaded(article, Some(related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::loaders::test_support::ScriptedBackend;
    use serde_json::json;

    fn loader(backend: &ScriptedBackend, include_related: bool) -> ArticleDetailLoader<ScriptedBackend> {
        ArticleDetailLoader::new(backend.clone(), Endpoints::default())
            .with_related(include_related, DEFAULT_RELATED_LIMIT)
    }

    #[tokio::test]
    async fn test_loads_single_article() {
        let backend = ScriptedBackend::new()
            .respond("/articles/42", 200, json!({"id": 42, "title": "Hello"}));

        let page = loader(&backend, false).load("42").await;

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"article": {"id": 42, "title": "Hello"}, "error": null})
        );
        assert_eq!(backend.requests(), vec!["/articles/42"]);
    }

    #[tokio::test]
    async fn test_missing_article() {
        let backend = ScriptedBackend::new().respond("/articles/42", 404, json!({"detail": "Not Found"}));

        let page = loader(&backend, false).load("42").await;

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"article": null, "error": "article not found"})
        );
    }

    #[tokio::test]
    async fn test_missing_article_with_related_enabled() {
        let backend = ScriptedBackend::new().respond("/articles/42", 404, json!(null));

        let page = loader(&backend, true).load("42").await;

        assert_eq!(page.article, None);
        assert_eq!(page.related_articles, Some(Vec::new()));
        assert_eq!(page.error.as_deref(), Some("article not found"));
        // 主請求失敗就不會再查相關文章
        assert_eq!(backend.requests(), vec!["/articles/42"]);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let backend = ScriptedBackend::new().fail("/articles/42", "connection refused");

        let page = loader(&backend, true).load("42").await;

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"article": null, "relatedArticles": [], "error": "could not load article"})
        );
    }

    #[tokio::test]
    async fn test_unparsable_article() {
        let backend = ScriptedBackend::new().respond_raw("/articles/42", 200, "{\"id\": ");

        let page = loader(&backend, false).load("42").await;

        assert_eq!(page.article, None);
        assert_eq!(page.error.as_deref(), Some("could not load article"));
    }

    #[tokio::test]
    async fn test_blank_id_is_not_found_without_request() {
        let backend = ScriptedBackend::new();

        let page = loader(&backend, false).load("  ").await;

        assert_eq!(page.error.as_deref(), Some("article not found"));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_loads_related_articles() {
        let backend = ScriptedBackend::new()
            .respond("/articles/42", 200, json!({"id": 42}))
            .respond(
                "/articles/42/related?limit=5",
                200,
                json!([{"id": 7}, {"id": 9}]),
            );

        let page = loader(&backend, true).load("42").await;

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "article": {"id": 42},
                "relatedArticles": [{"id": 7}, {"id": 9}],
                "error": null
            })
        );
        assert_eq!(
            backend.requests(),
            vec!["/articles/42", "/articles/42/related?limit=5"]
        );
    }

    #[tokio::test]
    async fn test_related_failures_are_absorbed() {
        for backend in [
            ScriptedBackend::new().respond("/articles/42/related?limit=5", 500, json!(null)),
            ScriptedBackend::new().fail("/articles/42/related?limit=5", "timed out"),
            ScriptedBackend::new().respond_raw("/articles/42/related?limit=5", 200, "oops"),
            ScriptedBackend::new().respond("/articles/42/related?limit=5", 200, json!({"id": 1})),
            ScriptedBackend::new().respond("/articles/42/related?limit=5", 200, json!(null)),
        ] {
            let backend = backend.respond("/articles/42", 200, json!({"id": 42}));
            let page = loader(&backend, true).load("42").await;

            assert_eq!(
                serde_json::to_value(&page).unwrap(),
                json!({"article": {"id": 42}, "relatedArticles": [], "error": null})
            );
        }
    }

    #[tokio::test]
    async fn test_related_limit_is_configurable() {
        let backend = ScriptedBackend::new()
            .respond("/articles/3", 200, json!({"id": 3}))
            .respond("/articles/3/related?limit=2", 200, json!([{"id": 4}]));

        let page = ArticleDetailLoader::new(backend.clone(), Endpoints::default())
            .with_related(true, 2)
            .load("3")
            .await;

        assert_eq!(page.related_articles, Some(vec![json!({"id": 4})]));
    }

    #[tokio::test]
    async fn test_repeated_loads_are_identical() {
        let backend = ScriptedBackend::new()
            .respond("/articles/42", 200, json!({"id": 42}))
            .respond("/articles/42/related?limit=5", 200, json!([{"id": 1}]));
        let loader = loader(&backend, true);

        assert_eq!(loader.load("42").await, loader.load("42").await);
    }
}
