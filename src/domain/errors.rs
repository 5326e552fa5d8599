use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorCategory {
    UserActionRequired,
    TemporaryFailure,
    InternalFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("validation failed: {message}")]
    Validation { message: String },
    #[error("generation rejected: {message}")]
    Rejected { message: String },
    #[error("quote service request timed out")]
    Timeout,
    #[error("quote service transport failed: {message}")]
    Transport { message: String },
    #[error("quote service returned an invalid response: {message}")]
    InvalidResponse { message: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl QuoteError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn category(&self) -> QuoteErrorCategory {
        match self {
            Self::Validation { .. } => QuoteErrorCategory::UserActionRequired,
            Self::Rejected { .. } | Self::Timeout | Self::Transport { .. } => {
                QuoteErrorCategory::TemporaryFailure
            }
            Self::InvalidResponse { .. } | Self::Internal { .. } => {
                QuoteErrorCategory::InternalFailure
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. } | Self::Timeout | Self::Transport { .. }
        )
    }

    /// Message placed in a `Failure` result when a completed request ends in
    /// this error. Application rejections and transport failures pass their
    /// message through verbatim.
    pub fn failure_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Rejected { message }
            | Self::Transport { message }
            | Self::InvalidResponse { message }
            | Self::Internal { message } => message.clone(),
            Self::Timeout => "The request timed out".to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } => {
                format!("Please review the theme selection: {message}")
            }
            Self::Rejected { message } => {
                format!("The quote service could not generate a quote: {message}")
            }
            Self::Timeout => "The quote service did not respond in time. Please retry.".to_string(),
            Self::Transport { message } => {
                format!("Could not reach the quote service: {message}")
            }
            Self::InvalidResponse { message } => {
                format!("The quote service returned an unexpected response: {message}")
            }
            Self::Internal { message } => {
                format!("An internal error occurred: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QuoteError, QuoteErrorCategory};

    #[test]
    fn category_maps_user_action_errors() {
        assert_eq!(
            QuoteError::validation("no theme selected").category(),
            QuoteErrorCategory::UserActionRequired
        );
    }

    #[test]
    fn category_maps_temporary_and_internal_errors() {
        assert_eq!(
            QuoteError::rejected("no quotes found").category(),
            QuoteErrorCategory::TemporaryFailure
        );
        assert_eq!(
            QuoteError::Timeout.category(),
            QuoteErrorCategory::TemporaryFailure
        );
        assert_eq!(
            QuoteError::transport("connection reset").category(),
            QuoteErrorCategory::TemporaryFailure
        );
        assert_eq!(
            QuoteError::invalid_response("missing quote").category(),
            QuoteErrorCategory::InternalFailure
        );
        assert_eq!(
            QuoteError::internal("client build failed").category(),
            QuoteErrorCategory::InternalFailure
        );
    }

    #[test]
    fn is_retryable_matches_retry_policy() {
        assert!(QuoteError::rejected("no quotes found").is_retryable());
        assert!(QuoteError::Timeout.is_retryable());
        assert!(QuoteError::transport("network").is_retryable());
        assert!(!QuoteError::validation("no theme selected").is_retryable());
        assert!(!QuoteError::invalid_response("bad JSON").is_retryable());
    }

    #[test]
    fn failure_message_passes_rejection_and_transport_text_through() {
        assert_eq!(
            QuoteError::rejected("no quotes found").failure_message(),
            "no quotes found"
        );
        assert_eq!(
            QuoteError::transport("Network Error").failure_message(),
            "Network Error"
        );
    }

    #[test]
    fn user_message_returns_actionable_message() {
        assert!(
            QuoteError::validation("no theme selected")
                .user_message()
                .contains("no theme selected")
        );
        assert!(
            QuoteError::Timeout
                .user_message()
                .contains("did not respond in time")
        );
        assert!(
            QuoteError::invalid_response("expected object")
                .user_message()
                .contains("expected object")
        );
    }
}
