use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Webhook request failed: {message}")]
    TransportError { message: String },

    #[error("HTTP error! status: {status}")]
    HttpStatusError { status: u16 },

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, LeadError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

const GENERIC_ALERT: &str =
    "Oops! Something went wrong. Please try again or contact us directly.";
const CROSS_ORIGIN_ALERT: &str = "Network error: This might be a CORS issue. The form data may have been sent, but please verify in your webhook dashboard.";

impl LeadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeadError::TransportError { .. } | LeadError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            LeadError::InvalidConfigValueError { .. } | LeadError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            LeadError::ValidationError { .. } => ErrorCategory::Input,
            LeadError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// True when the failure text points at a browser-style cross-origin
    /// rejection, in which case the webhook may still have received the data.
    pub fn looks_cross_origin(&self) -> bool {
        match self {
            LeadError::TransportError { message } => {
                message.contains("CORS")
                    || message.contains("Failed to fetch")
                    || message.to_ascii_lowercase().contains("cross-origin")
            }
            _ => false,
        }
    }

    /// Text for the blocking alert shown when a submission fails.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadError::TransportError { .. } | LeadError::HttpStatusError { .. } => {
                if self.looks_cross_origin() {
                    CROSS_ORIGIN_ALERT.to_string()
                } else {
                    GENERIC_ALERT.to_string()
                }
            }
            LeadError::ValidationError { message } => message.clone(),
            LeadError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LeadError::TransportError { .. } if self.looks_cross_origin() => {
                "Check the webhook dashboard to confirm whether the lead was received"
            }
            LeadError::TransportError { .. } => {
                "Check network connectivity and the webhook URL, then submit again"
            }
            LeadError::HttpStatusError { .. } => {
                "The webhook rejected the request; verify the endpoint is active"
            }
            LeadError::ValidationError { .. } => "Correct the highlighted fields and retry",
            LeadError::InvalidConfigValueError { .. } | LeadError::ConfigValidationError { .. } => {
                "Set WEBHOOK_URL in the environment or .env file, or fix the config file"
            }
            LeadError::IoError(_) => "Check file permissions and that the path exists",
        }
    }
}
