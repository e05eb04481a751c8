//! Firebase Client Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirebaseError {
    /// Network failure or a response body that was not valid JSON
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status with the provider's error code, e.g. `EMAIL_EXISTS`
    #[error("provider rejected request: {code}")]
    Provider { code: String },

    /// Response parsed as JSON but not in the shape this client expects
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl FirebaseError {
    /// Readable message for the banner, in place of the SDK's `error.message`
    pub fn user_message(&self) -> String {
        match self {
            FirebaseError::Provider { code } => describe_auth_code(code),
            FirebaseError::Transport(_) => "Network error. Please try again.".to_string(),
            FirebaseError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

/// Map Identity Toolkit error codes to the messages users see. Codes the map
/// does not know are shown as-is; some arrive with a trailing explanation
/// (`WEAK_PASSWORD : ...`) so only the leading token is matched.
pub fn describe_auth_code(code: &str) -> String {
    let token = code.split_whitespace().next().unwrap_or(code);
    match token {
        "EMAIL_EXISTS" => "This email is already in use.".to_string(),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password.".to_string()
        }
        "INVALID_EMAIL" => "The email address is badly formatted.".to_string(),
        "USER_DISABLED" => "This account has been disabled.".to_string(),
        "WEAK_PASSWORD" => "The password is too weak.".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts. Please try again later.".to_string()
        }
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this project.".to_string(),
        _ => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_readable_text() {
        assert_eq!(describe_auth_code("EMAIL_EXISTS"), "This email is already in use.");
        assert_eq!(
            describe_auth_code("INVALID_LOGIN_CREDENTIALS"),
            "Incorrect email or password."
        );
    }

    #[test]
    fn codes_with_trailing_explanations_match_on_the_leading_token() {
        assert_eq!(
            describe_auth_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            "The password is too weak."
        );
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(describe_auth_code("SOMETHING_NEW"), "SOMETHING_NEW");
    }

    #[test]
    fn provider_error_surfaces_mapped_message() {
        let err = FirebaseError::Provider {
            code: "EMAIL_EXISTS".into(),
        };
        assert_eq!(err.user_message(), "This email is already in use.");
    }
}
