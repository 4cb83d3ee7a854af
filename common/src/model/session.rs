use serde::Serialize;

use crate::error::ConsoleError;

/// Body of `POST /admin/login/`.
#[derive(Serialize, Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Both fields must be filled before the request is sent.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.username.is_empty() {
            return Err(ConsoleError::invalid_field("Username", "is required"));
        }
        if self.password.is_empty() {
            return Err(ConsoleError::invalid_field("Password", "is required"));
        }
        Ok(())
    }
}

/// Inline message shown under the login form.
pub fn login_failure_message(err: &ConsoleError) -> String {
    match err {
        ConsoleError::Unauthorized | ConsoleError::Status { status: 400..=403, .. } => {
            "Invalid username or password".to_string()
        }
        ConsoleError::Transport(_) => "Unable to reach the server".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_password_is_not() {
        let req = LoginRequest::new("  admin ", " secret ");
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, " secret ");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_credentials_are_rejected() {
        let err = LoginRequest::new("   ", "pw").validate().unwrap_err();
        assert_eq!(err.to_string(), "Username: is required");
        let err = LoginRequest::new("admin", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password: is required");
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            login_failure_message(&ConsoleError::Unauthorized),
            "Invalid username or password"
        );
        assert_eq!(
            login_failure_message(&ConsoleError::from_status(400, "bad".into())),
            "Invalid username or password"
        );
        assert_eq!(
            login_failure_message(&ConsoleError::Transport("offline".into())),
            "Unable to reach the server"
        );
        assert_eq!(
            login_failure_message(&ConsoleError::from_status(500, "boom".into())),
            "Request failed with status 500: boom"
        );
    }
}
