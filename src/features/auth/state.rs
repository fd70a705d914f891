//! Auth state and context for the frontend. The provider hydrates state once
//! on mount from the stored session and exposes signals for the header and
//! sidebar. Guards do not read this context — they re-check the session and
//! role themselves on every mount so stale state can never authorize a page.

use crate::features::auth::{client, session, types::CurrentUser};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<CurrentUser>>,
    pub is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            is_authenticated: RwSignal::new(false),
        }
    }

    /// Updates in-memory state after login.
    pub fn set_signed_in(&self, user: Option<CurrentUser>) {
        self.is_authenticated.set(true);
        self.user.set(user);
    }

    /// Clears both the in-memory state and the stored session.
    pub fn sign_out(&self) {
        client::logout();
        self.user.set(None);
        self.is_authenticated.set(false);
    }
}

/// Provides auth context and hydrates it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    if session::is_valid() {
        auth.is_authenticated.set(true);
        spawn_local(async move {
            if let Ok(user) = client::current_user().await {
                let _ = auth.user.try_set(Some(user));
            }
        });
    }

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}
