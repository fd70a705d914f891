//! Request and response types for auth-related API calls. These payloads carry
//! credentials and tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Token pair minted by `/auth/login/`. The access token is short-lived; the
/// refresh token exists solely to mint a new access token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Completes a reset begun from the emailed link; the token travels in the
/// URL, not this body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub new_password: String,
    pub new_password_confirm: String,
}

/// Current-user summary returned by `/auth/me/`. Guards fetch this fresh per
/// evaluation and never cache it beyond the component lifetime, so a revoked
/// role or approval takes effect on the next mount.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub portfolio_published: bool,
    #[serde(default)]
    pub username_slug: Option<String>,
}

impl CurrentUser {
    /// Staff and superusers share the admin area.
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_decodes_with_missing_optional_fields() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"username":"ada","is_approved":true}"#).expect("decode");
        assert_eq!(user.username, "ada");
        assert!(user.is_approved);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert_eq!(user.username_slug, None);
        assert!(!user.is_admin());
    }

    #[test]
    fn staff_or_superuser_counts_as_admin() {
        let staff: CurrentUser =
            serde_json::from_str(r#"{"username":"ada","is_staff":true}"#).expect("decode");
        assert!(staff.is_admin());
        let root: CurrentUser =
            serde_json::from_str(r#"{"username":"ada","is_superuser":true}"#).expect("decode");
        assert!(root.is_admin());
    }

    #[test]
    fn login_request_serializes_expected_fields() {
        let request = LoginRequest {
            username_or_email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).expect("encode");
        assert!(json.contains("username_or_email"));
        assert!(json.contains("password"));
    }
}
