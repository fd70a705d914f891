//! Client wrappers for the admin user-management endpoints.

use crate::{
    app_lib::{api, AppError},
    features::users::types::{ApprovalUpdate, StatusUpdate, SystemOverview, UserSummary, UsersPage},
};

/// Fetches one page of accounts.
pub async fn list_users(page: usize, page_size: usize) -> Result<UsersPage, AppError> {
    api::get_json(&format!("/auth/users/?page={page}&page_size={page_size}")).await
}

/// Grants or revokes portfolio approval for an account.
pub async fn set_approval(user_id: i64, is_approved: bool) -> Result<UserSummary, AppError> {
    api::patch_json(
        &format!("/auth/users/{user_id}/approval/"),
        &ApprovalUpdate { is_approved },
    )
    .await
}

/// Activates or deactivates an account.
pub async fn set_status(user_id: i64, is_active: bool) -> Result<UserSummary, AppError> {
    api::patch_json(
        &format!("/auth/users/{user_id}/status/"),
        &StatusUpdate { is_active },
    )
    .await
}

/// Fetches the site-wide counters for the overview page.
pub async fn system_overview() -> Result<SystemOverview, AppError> {
    api::get_json("/auth/system/overview/").await
}
