//! Error Types
//!
//! Transport failures, unexpected payloads, and local validation failures.

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("expected JSON but got '{content_type}': {snippet}")]
    UnexpectedContent { content_type: String, snippet: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    /// Superseded by a newer request; not a failure
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

/// Rejected before any request is sent. Display is the operator-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor, preencha o nome de urna.")]
    MissingBallotName,

    #[error("Informe uma posição válida para o candidato no grid.")]
    InvalidPosition,

    #[error("Não foi possível identificar o candidato para atualização.")]
    MissingId,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Another add/edit form is already open
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("another candidate form is already open")]
pub struct SessionConflict;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_abort_counts_as_cancelled() {
        assert!(ApiError::Aborted.is_cancelled());
        assert!(!ApiError::Network("offline".into()).is_cancelled());
        assert!(!ApiError::Status { status: 500, url: "/x".into() }.is_cancelled());
    }

    #[test]
    fn test_submit_error_wraps_sources() {
        let err: SubmitError = ValidationError::MissingBallotName.into();
        assert_eq!(err.to_string(), "Por favor, preencha o nome de urna.");

        let err: SubmitError = ApiError::Decode("bad".into()).into();
        assert!(matches!(err, SubmitError::Api(ApiError::Decode(_))));
    }
}
