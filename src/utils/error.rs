use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0}")]
    TransportError(#[from] reqwest::Error),

    #[error("{message}")]
    BackendError { message: String },

    #[error("{url} responded with status {status}")]
    StatusError { url: String, status: u16 },

    #[error("invalid JSON in response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("unexpected response from {url}: expected {expected}")]
    UnexpectedShapeError { url: String, expected: String },

    #[error("invalid article id: {id:?}")]
    InvalidArticleIdError { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，對應頁面載入的失敗層級
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 收到回應，但狀態碼不是成功
    Soft,
    /// 沒有可用的回應：連線或解析失敗
    Hard,
    /// 設定錯誤，在任何 loader 執行前就會被攔下
    Configuration,
}

impl LoaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoaderError::StatusError { .. } => ErrorCategory::Soft,
            // 空的 id 不會送出請求，視同找不到
            LoaderError::InvalidArticleIdError { .. } => ErrorCategory::Soft,
            LoaderError::TransportError(_)
            | LoaderError::BackendError { .. }
            | LoaderError::SerializationError(_)
            | LoaderError::UnexpectedShapeError { .. } => ErrorCategory::Hard,
            LoaderError::IoError(_)
            | LoaderError::ConfigValidationError { .. }
            | LoaderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_soft(&self) -> bool {
        self.category() == ErrorCategory::Soft
    }

    /// 失敗的描述文字；沒有描述時回傳 "unknown error"
    pub fn describe(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "unknown error".to_string()
        } else {
            message
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Soft => format!("The backend rejected the request: {}", self.describe()),
            ErrorCategory::Hard => format!("The backend could not be reached: {}", self.describe()),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self.describe()),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LoaderError::IoError(_) => "Check that the configuration file exists and is readable",
            LoaderError::ConfigValidationError { .. } => "Check the TOML syntax of the configuration file",
            LoaderError::InvalidConfigValueError { .. } => {
                "Fix the reported setting and run the command again"
            }
            LoaderError::StatusError { .. } | LoaderError::InvalidArticleIdError { .. } => {
                "Check the requested article id"
            }
            _ => "Check that the backend is running and reachable from this host",
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
