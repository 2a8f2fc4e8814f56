use crate::utils::error::{LoaderError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LoaderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 任何 [`ConfigProvider`](crate::core::ConfigProvider) 共用的檢查
pub fn validate_provider<C: crate::core::ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("backend_url", config.backend_url())?;
    validate_range(
        "related_limit",
        config.related_limit(),
        MIN_RELATED_LIMIT,
        MAX_RELATED_LIMIT,
    )?;
    if let Some(limit) = config.article_limit() {
        validate_positive_number("article_limit", limit, 1)?;
    }
    Ok(())
}

pub const MIN_RELATED_LIMIT: usize = 1;
pub const MAX_RELATED_LIMIT: usize = 100;
