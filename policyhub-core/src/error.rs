use thiserror::Error;

/// Failure talking to the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Resource not found")]
    NotFound,
}

impl ApiError {
    /// Server-provided message carried by a rejected request.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Credentials were rejected")]
    Rejected { message: Option<String> },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => Self::Rejected { message },
            ApiError::NotFound => Self::Rejected { message: None },
            ApiError::Transport(msg) | ApiError::Decode(msg) => Self::Transport(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User is not logged in")]
    Unauthenticated,
    #[error("Policy not found")]
    NotFound,
    #[error(transparent)]
    Api(#[from] ApiError),
}
