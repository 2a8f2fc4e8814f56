use crate::core::endpoints::{DEFAULT_BACKEND_URL, DEFAULT_RELATED_LIMIT};
use crate::core::ConfigProvider;
use crate::utils::error::{LoaderError, Result};
use crate::utils::validation::{validate_provider, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    pub list: ListConfig,
    pub detail: DetailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub include_digest: bool,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub include_related: bool,
    pub related_limit: usize,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            include_related: false,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LoaderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_url(&self) -> &str {
        &self.backend.base_url
    }

    fn include_digest(&self) -> bool {
        self.list.include_digest
    }

    fn include_related(&self) -> bool {
        self.detail.include_related
    }

    fn related_limit(&self) -> usize {
        self.detail.related_limit
    }

    fn article_skip(&self) -> Option<usize> {
        self.list.skip
    }

    fn article_limit(&self) -> Option<usize> {
        self.list.limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[backend]
base_url = "http://localhost:8000"

[list]
include_digest = true
skip = 10
limit = 20

[detail]
include_related = true
related_limit = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.backend_url(), "http://localhost:8000");
        assert!(config.include_digest());
        assert_eq!(config.article_skip(), Some(10));
        assert_eq!(config.article_limit(), Some(20));
        assert!(config.include_related());
        assert_eq!(config.related_limit(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.backend_url(), "http://backend:8000");
        assert!(!config.include_digest());
        assert!(!config.include_related());
        assert_eq!(config.related_limit(), 5);
        assert_eq!(config.article_limit(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ARTICLE_LOADERS_TEST_BACKEND", "https://news.example.com");

        let toml_content = r#"
[backend]
base_url = "${ARTICLE_LOADERS_TEST_BACKEND}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend_url(), "https://news.example.com");

        std::env::remove_var("ARTICLE_LOADERS_TEST_BACKEND");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[backend]
base_url = "${ARTICLE_LOADERS_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend_url(), "${ARTICLE_LOADERS_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[detail]
related_limit = 500
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[backend\nbase_url = 1").unwrap_err();
        assert!(matches!(err, LoaderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[backend]
base_url = "http://127.0.0.1:9000"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, LoaderError::IoError(_)));
    }
}
