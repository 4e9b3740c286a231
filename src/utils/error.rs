use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("{context}: {source}")]
    RequestError {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: {message}")]
    UpstreamError {
        context: String,
        status: Option<u16>,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl ExplorerError {
    pub fn upstream(context: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::UpstreamError {
            context: context.into(),
            status,
            message: message.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    /// 上游 (NASA) 回傳的狀態碼，若有的話
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamError { status, .. } => *status,
            Self::RequestError { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::RequestError { source, .. } if source.is_timeout() => {
                "NASA API did not answer in time; try again later"
            }
            Self::RequestError { .. } => "Check network connectivity to the NASA API base URL",
            Self::UpstreamError { status: Some(403), .. } => {
                "Check that NASA_API_KEY is a valid api.nasa.gov key"
            }
            Self::UpstreamError { status: Some(429), .. } => {
                "The NASA API rate limit was hit; use a personal API key instead of DEMO_KEY"
            }
            Self::UpstreamError { .. } => "The NASA API rejected the request; check the parameters",
            Self::IoError(_) => "Check file paths and permissions",
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Review the command line flags, environment variables and config file"
            }
            Self::ProcessingError { .. } => "Adjust the request parameters and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Setting '{}' failed validation: {}", field, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
