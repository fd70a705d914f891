//! Types for the admin user-management endpoints.

use serde::{Deserialize, Serialize};

/// Account state embedded in each listed user.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    #[allow(dead_code)]
    pub id: i64,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub portfolio_published: bool,
    #[serde(default)]
    pub username_slug: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub date_joined: Option<String>,
    pub profile: UserProfile,
}

/// Page of accounts returned by the listing endpoint, with its own pagination
/// metadata rather than the DRF envelope the content endpoints use.
#[derive(Clone, Debug, Deserialize)]
pub struct UsersPage {
    pub results: Vec<UserSummary>,
    pub total_users: usize,
    #[allow(dead_code)]
    pub page: usize,
    #[allow(dead_code)]
    pub page_size: usize,
    pub total_pages: usize,
    #[serde(default)]
    #[allow(dead_code)]
    pub has_next: bool,
    #[serde(default)]
    #[allow(dead_code)]
    pub has_previous: bool,
}

/// Site-wide counters for the admin overview page.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SystemOverview {
    #[serde(default)]
    pub total_users: usize,
    #[serde(default)]
    pub active_users: usize,
    #[serde(default)]
    pub approved_users: usize,
    #[serde(default)]
    pub pending_users: usize,
    #[serde(default)]
    pub staff_users: usize,
    #[serde(default)]
    pub superusers: usize,
    #[serde(default)]
    pub total_projects: usize,
    #[serde(default)]
    pub total_experiences: usize,
    #[serde(default)]
    pub total_educations: usize,
    #[serde(default)]
    pub total_skills: usize,
    #[serde(default)]
    pub total_about_me: usize,
    #[serde(default)]
    pub total_messages: usize,
    #[serde(default)]
    pub new_messages: usize,
    #[serde(default)]
    pub read_messages: usize,
    #[serde(default)]
    pub replied_messages: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct ApprovalUpdate {
    pub is_approved: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatusUpdate {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_page_decodes_nested_profiles() {
        let body = r#"{
            "results": [{
                "id": 4,
                "username": "ada",
                "email": "ada@example.com",
                "is_active": true,
                "profile": {"id": 9, "is_approved": false, "email_verified": true}
            }],
            "total_users": 1,
            "page": 1,
            "page_size": 30,
            "total_pages": 1,
            "has_next": false,
            "has_previous": false
        }"#;
        let page: UsersPage = serde_json::from_str(body).expect("decode");
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].username, "ada");
        assert!(!page.results[0].profile.is_approved);
        assert!(page.results[0].profile.email_verified);
    }

    #[test]
    fn system_overview_defaults_missing_counters_to_zero() {
        let overview: SystemOverview =
            serde_json::from_str(r#"{"total_users": 12}"#).expect("decode");
        assert_eq!(overview.total_users, 12);
        assert_eq!(overview.new_messages, 0);
    }
}
