use thiserror::Error;

/// Everything that can go wrong talking to the activities API.
///
/// Callers mostly care about one split: [`ApiError::Rejected`] is the server
/// saying no (show its detail), everything else is the transport or the
/// payload failing (show a generic message).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid api base url `{0}`")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("server rejected request ({status}): {}", detail.as_deref().unwrap_or("<no detail>"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// The server-supplied detail of a rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display_preserves_detail() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "server rejected request (400): Student is already signed up"
        );
        assert_eq!(err.detail(), Some("Student is already signed up"));
        assert!(err.is_rejection());

        let bare = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "server rejected request (500): <no detail>");
    }

    #[test]
    fn test_transport_has_no_detail() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.detail(), None);
        assert!(!err.is_rejection());
    }
}
