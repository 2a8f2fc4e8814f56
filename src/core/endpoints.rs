use crate::utils::error::{LoaderError, Result};
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://backend:8000";
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// 由後端 base URL 組出各個 endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| LoaderError::InvalidConfigValueError {
            field: "backend_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if base.cannot_be_a_base() {
            return Err(LoaderError::InvalidConfigValueError {
                field: "backend_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{backend}/digest/`
    pub fn digest(&self) -> Url {
        self.with_segments(&["digest", ""])
    }

    /// `{backend}/articles/`，有設定時才帶 `skip`/`limit`
    pub fn articles(&self, skip: Option<usize>, limit: Option<usize>) -> Url {
        let mut url = self.with_segments(&["articles", ""]);
        if skip.is_some() || limit.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(skip) = skip {
                query.append_pair("skip", &skip.to_string());
            }
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        url
    }

    /// `{backend}/articles/{id}`
    pub fn article(&self, id: &str) -> Result<Url> {
        let id = Self::checked_id(id)?;
        Ok(self.with_segments(&["articles", id]))
    }

    /// `{backend}/articles/{id}/related?limit={limit}`
    pub fn related(&self, id: &str, limit: usize) -> Result<Url> {
        let id = Self::checked_id(id)?;
        let mut url = self.with_segments(&["articles", id, "related"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    fn checked_id(id: &str) -> Result<&str> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(LoaderError::InvalidArticleIdError { id: id.to_string() });
        }
        Ok(trimmed)
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // new() 已排除 cannot-be-a-base，這裡一定拿得到 segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
        }
    }
}
