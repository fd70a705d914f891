//! Portfolio content feature: the owner-scoped CRUD resources behind the
//! dashboard forms and the public read-only portfolio page.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;

/// Top-level path segments that can never be portfolio usernames. The dynamic
/// `/:username` route matches last, but a direct fetch for one of these would
/// otherwise produce a confusing backend 404.
const RESERVED_SLUGS: &[&str] = &[
    "admin",
    "dashboard",
    "forgot-password",
    "login",
    "pending-approval",
    "portfolio",
    "register",
    "reset-password",
    "verify-email",
];

/// True when the slug collides with an application route.
pub(crate) fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

#[cfg(test)]
mod tests {
    use super::is_reserved_slug;

    #[test]
    fn application_routes_are_reserved() {
        assert!(is_reserved_slug("admin"));
        assert!(is_reserved_slug("dashboard"));
        assert!(is_reserved_slug("login"));
        assert!(is_reserved_slug("forgot-password"));
        assert!(is_reserved_slug("reset-password"));
    }

    #[test]
    fn ordinary_usernames_are_not_reserved() {
        assert!(!is_reserved_slug("ada"));
        assert!(!is_reserved_slug("grace-hopper"));
    }
}
