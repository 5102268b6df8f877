use thiserror::Error;

/// 錯誤分類，用於日誌記錄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Configuration,
    Upstream,
    Internal,
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String },

    #[error("Missing required fields: {fields:?}")]
    MissingFields { fields: Vec<&'static str> },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Email provider returned {status}")]
    ProviderError {
        status: u16,
        details: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration file error: {message}")]
    ConfigFileError { message: String },
}

impl ContactError {
    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::MethodNotAllowed { .. } => 405,
            ContactError::InvalidBody { .. } | ContactError::MissingFields { .. } => 400,
            _ => 500,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::MethodNotAllowed { .. }
            | ContactError::InvalidBody { .. }
            | ContactError::MissingFields { .. } => ErrorCategory::Request,
            ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::ConfigFileError { .. } => ErrorCategory::Configuration,
            ContactError::ProviderError { .. } => ErrorCategory::Upstream,
            ContactError::HttpError(_)
            | ContactError::IoError(_)
            | ContactError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// 回傳給使用者的訊息，不包含內部細節
    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            ContactError::MethodNotAllowed { .. } => "Method not allowed",
            ContactError::InvalidBody { .. } => "Invalid request body",
            ContactError::MissingFields { .. } => "Name and email are required",
            ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::ConfigFileError { .. } => "Email service configuration error",
            ContactError::ProviderError { .. } => "Failed to send email",
            ContactError::HttpError(_)
            | ContactError::IoError(_)
            | ContactError::SerializationError(_) => "An unexpected error occurred",
        }
    }

    /// 僅上游錯誤會附帶細節
    pub fn details(&self) -> Option<&str> {
        match self {
            ContactError::ProviderError { details, .. } => details.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_taxonomy() {
        let method = ContactError::MethodNotAllowed {
            method: "GET".to_string(),
        };
        let missing = ContactError::MissingFields {
            fields: vec!["name"],
        };
        let config = ContactError::MissingConfigError {
            field: "RESEND_API_KEY".to_string(),
        };
        let upstream = ContactError::ProviderError {
            status: 422,
            details: Some("Invalid `to` field".to_string()),
        };

        assert_eq!(method.status_code(), 405);
        assert_eq!(missing.status_code(), 400);
        assert_eq!(config.status_code(), 500);
        assert_eq!(upstream.status_code(), 500);
        assert_eq!(upstream.category(), ErrorCategory::Upstream);
        assert_eq!(upstream.details(), Some("Invalid `to` field"));
        assert_eq!(config.details(), None);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err: ContactError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.user_friendly_message(), "An unexpected error occurred");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
