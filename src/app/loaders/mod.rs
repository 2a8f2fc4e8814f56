pub mod article_detail;
pub mod article_list;

#[cfg(test)]
pub(crate) mod test_support;

pub use article_detail::ArticleDetailLoader;
pub use article_list::ArticleListLoader;

use crate::core::Article;
use crate::utils::error::{LoaderError, Result};
use serde_json::Value;
use url::Url;

/// 把回應內容轉成文章列表；falsy 值（null、false、0、""）視為空列表
pub(crate) fn into_article_list(url: &Url, value: Value) -> Result<Vec<Article>> {
    match value {
        Value::Array(items) => Ok(items),
        value if is_falsy(&value) => Ok(Vec::new()),
        _ => Err(LoaderError::UnexpectedShapeError {
            url: url.to_string(),
            expected: "a JSON array".to_string(),
        }),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
