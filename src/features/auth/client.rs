//! Client wrappers for auth API endpoints. These helpers centralize session
//! persistence around login/logout, keeping token mechanics out of route code.

use crate::{
    app_lib::{api, AppError},
    features::auth::{
        session,
        types::{
            CurrentUser, LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest,
            RegisterRequest, ResendOtpRequest, TokenPair, VerifyEmailOtpRequest,
        },
    },
};

/// Logs in and persists the returned token pair. The follow-up profile fetch
/// decides where to land (admin area, dashboard, pending approval); if it
/// fails the session is still considered established and the caller falls back
/// to the default destination.
pub async fn login(request: &LoginRequest) -> Result<Option<CurrentUser>, AppError> {
    let tokens: TokenPair = api::post_json("/auth/login/", request).await?;
    session::store_session(&tokens.access, &tokens.refresh);

    match current_user().await {
        Ok(user) => Ok(Some(user)),
        Err(_) => Ok(None),
    }
}

/// Registers a new account. The account must verify its email before login.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    api::post_json_discard("/auth/register/", request).await
}

/// Submits the one-time code from the verification email.
pub async fn verify_email_otp(request: &VerifyEmailOtpRequest) -> Result<(), AppError> {
    api::post_json_discard("/auth/verify-email-otp/", request).await
}

/// Requests a fresh verification code.
pub async fn resend_verification_otp(email: &str) -> Result<(), AppError> {
    let request = ResendOtpRequest {
        email: email.to_string(),
    };
    api::post_json_discard("/auth/resend-verification-otp/", &request).await
}

/// Requests a password-reset email. The server answers 200 whether or not the
/// address has an account, so it never reveals which emails are registered.
pub async fn request_password_reset(email: &str) -> Result<(), AppError> {
    let request = PasswordResetRequest {
        email: email.to_string(),
    };
    api::post_json_discard("/auth/password-reset/", &request).await
}

/// Sets a new password using the token from the emailed reset link.
pub async fn confirm_password_reset(
    token: &str,
    request: &PasswordResetConfirmRequest,
) -> Result<(), AppError> {
    api::post_json_discard(&format!("/auth/password-reset/{token}/"), request).await
}

/// Fetches the current user's role and approval flags. Guards call this fresh
/// on every mount.
pub async fn current_user() -> Result<CurrentUser, AppError> {
    api::get_json("/auth/me/").await
}

/// Drops the local session. Logout is purely client-side; the server keeps no
/// session state beyond the tokens themselves.
pub fn logout() {
    session::clear();
}
