use reqwest::StatusCode;
use thiserror::Error;

/// Request Client 的失敗類型
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid endpoint: '{endpoint}'")]
    InvalidEndpoint { endpoint: String },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// 診斷用分類（只寫入日誌，不顯示給使用者）
    pub fn category(&self) -> &'static str {
        match self {
            RequestError::InvalidEndpoint { .. } | RequestError::InvalidHeader { .. } => "request",
            RequestError::Network(_) => "network",
            RequestError::HttpStatus { .. } => "http_status",
            RequestError::Decode(_) => "decode",
        }
    }

    /// 錯誤回應中若帶有 `{"message": "..."}`，取出伺服器提供的訊息
    pub fn server_message(&self) -> Option<String> {
        let RequestError::HttpStatus { body, .. } = self else {
            return None;
        };

        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    Request(#[from] RequestError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::Request(e) => format!("Could not reach the API ({})", e.category()),
            SiteError::IoError(e) => format!("File system or network socket error: {}", e),
            SiteError::SerializationError(_) => "Could not read JSON data".to_string(),
            SiteError::ConfigError { message } => message.clone(),
            SiteError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            SiteError::ConfigValidationError { field, message } => {
                format!("The configuration '{}' could not be loaded: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
