//! Authorization decisions for the role-gated guards, kept free of any view
//! code so the policy is unit-testable. The two verdict functions encode an
//! intentional asymmetry: the admin check fails closed, while the approved-user
//! check fails open so a transient network error cannot lock out an otherwise
//! valid session.

use crate::app_lib::AppError;
use crate::features::auth::types::CurrentUser;

/// Terminal outcome of a guard evaluation for an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Render the wrapped children.
    Allow,
    /// Redirect to the end-user dashboard.
    Dashboard,
    /// Redirect to the admin area.
    AdminArea,
    /// Redirect to the pending-approval page.
    PendingApproval,
}

/// Admin gate: staff or superuser only. A failed verification call denies.
pub(crate) fn admin_verdict(result: &Result<CurrentUser, AppError>) -> Verdict {
    match result {
        Ok(user) if user.is_admin() => Verdict::Allow,
        Ok(_) => Verdict::Dashboard,
        Err(_) => Verdict::Dashboard,
    }
}

/// Approved-user gate. Staff do not use the end-user dashboard and are sent to
/// the admin area instead; everyone else needs approval. A failed verification
/// call allows.
pub(crate) fn member_verdict(result: &Result<CurrentUser, AppError>) -> Verdict {
    match result {
        Ok(user) if user.is_admin() => Verdict::AdminArea,
        Ok(user) if user.is_approved => Verdict::Allow,
        Ok(_) => Verdict::PendingApproval,
        Err(_) => Verdict::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_staff: bool, is_superuser: bool, is_approved: bool) -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            is_staff,
            is_superuser,
            is_approved,
            email_verified: true,
            portfolio_published: false,
            username_slug: Some("ada".to_string()),
        }
    }

    fn network_error() -> AppError {
        AppError::Network("connection reset".to_string())
    }

    #[test]
    fn admin_gate_accepts_staff_and_superusers() {
        assert_eq!(admin_verdict(&Ok(user(true, false, true))), Verdict::Allow);
        assert_eq!(admin_verdict(&Ok(user(false, true, true))), Verdict::Allow);
    }

    #[test]
    fn admin_gate_denies_regular_users() {
        assert_eq!(admin_verdict(&Ok(user(false, false, true))), Verdict::Dashboard);
    }

    #[test]
    fn admin_gate_fails_closed_on_verification_error() {
        assert_eq!(admin_verdict(&Err(network_error())), Verdict::Dashboard);
    }

    #[test]
    fn member_gate_accepts_approved_users() {
        assert_eq!(member_verdict(&Ok(user(false, false, true))), Verdict::Allow);
    }

    #[test]
    fn member_gate_parks_unapproved_users() {
        assert_eq!(
            member_verdict(&Ok(user(false, false, false))),
            Verdict::PendingApproval
        );
    }

    #[test]
    fn member_gate_sends_staff_to_the_admin_area() {
        assert_eq!(member_verdict(&Ok(user(true, false, true))), Verdict::AdminArea);
        assert_eq!(member_verdict(&Ok(user(false, true, false))), Verdict::AdminArea);
    }

    #[test]
    fn member_gate_fails_open_on_verification_error() {
        // Identical failure, opposite policy to the admin gate.
        assert_eq!(member_verdict(&Err(network_error())), Verdict::Allow);
        assert_eq!(admin_verdict(&Err(network_error())), Verdict::Dashboard);
    }
}
