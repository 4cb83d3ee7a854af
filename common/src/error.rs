use thiserror::Error;

/// Every way a single console action can fail.
///
/// Failures are terminal for the action that raised them: the frontend shows
/// the message and the user retries by triggering the action again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend rejected the session.
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered 2xx but the body could not be decoded.
    #[error("Unexpected response: {0}")]
    MalformedBody(String),

    /// A form field could not be turned into a payload value.
    #[error("{field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ConsoleError {
    /// Classifies a non-success status code.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ConsoleError::Unauthorized,
            _ => ConsoleError::Status { status, body },
        }
    }

    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        ConsoleError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleError;

    #[test]
    fn unauthorized_status_is_classified() {
        assert_eq!(
            ConsoleError::from_status(401, String::new()),
            ConsoleError::Unauthorized
        );
    }

    #[test]
    fn other_statuses_keep_code_and_body() {
        let err = ConsoleError::from_status(422, "bad date".to_string());
        assert_eq!(err.to_string(), "Request failed with status 422: bad date");
    }
}
