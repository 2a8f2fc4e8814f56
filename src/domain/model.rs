use crate::utils::error::Result;
use reqwest::StatusCode;
use serde::Serialize;

/// 後端回傳的文章，這一層不檢查任何欄位
pub type Article = serde_json::Value;

/// 文章列表旁的摘要資源，不存在是正常狀態
pub type Digest = serde_json::Value;

pub const ARTICLES_UNAVAILABLE: &str = "could not load articles";
pub const ARTICLES_LOAD_FAILED_PREFIX: &str = "error loading articles";
pub const ARTICLE_NOT_FOUND: &str = "article not found";
pub const ARTICLE_UNAVAILABLE: &str = "could not load article";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListPage {
    pub articles: Vec<Article>,
    /// `None` 表示沒有啟用 digest，欄位不會出現在輸出中；
    /// `Some(None)` 則序列化成 `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<Option<Digest>>,
    pub error: Option<String>,
}

impl ArticleListPage {
    pub fn loaded(articles: Vec<Article>, digest: Option<Option<Digest>>) -> Self {
        Self {
            articles,
            digest,
            error: None,
        }
    }

    pub fn failed(digest: Option<Option<Digest>>, error: impl Into<String>) -> Self {
        Self {
            articles: Vec::new(),
            digest,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub article: Option<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<Article>>,
    pub error: Option<String>,
}

impl ArticlePage {
    pub fn loaded(article: Article, related_articles: Option<Vec<Article>>) -> Self {
        Self {
            article: (!article.is_null()).then_some(article),
            related_articles,
            error: None,
        }
    }

    pub fn failed(include_related: bool, error: impl Into<String>) -> Self {
        Self {
            article: None,
            related_articles: include_related.then(Vec::new),
            error: Some(error.into()),
        }
    }
}

/// 交給模板層渲染的頁面資料
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    ArticleList(ArticleListPage),
    Article(ArticlePage),
}

impl PageData {
    pub fn error(&self) -> Option<&str> {
        match self {
            PageData::ArticleList(page) => page.error.as_deref(),
            PageData::Article(page) => page.error.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    ArticleList,
    Article { id: String },
}

#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl BackendResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
