//! Sign-in pages. The member and admin entry points share one form and differ
//! only in copy; where a signed-in account lands is decided by its role and
//! approval state, not by which page it signed in from.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{CurrentUser, LoginRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <LoginForm title="Sign in" subtitle="Manage your portfolio." />
        </AppShell>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <AppShell>
            <LoginForm title="Admin sign in" subtitle="Staff access only." />
        </AppShell>
    }
}

/// Destination after a successful login. A missing profile (the follow-up
/// fetch failed) falls back to the dashboard, where the guard re-checks.
fn landing_path(user: Option<&CurrentUser>) -> &'static str {
    match user {
        Some(user) if user.is_admin() => "/admin",
        Some(user) if !user.is_approved => "/pending-approval",
        _ => "/dashboard",
    }
}

#[component]
fn LoginForm(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (identity, set_identity) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    let path = landing_path(user.as_ref());
                    auth.set_signed_in(user);
                    navigate(path, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let identity_value = identity.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if identity_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Username and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            username_or_email: identity_value,
            password: password_value,
        });
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <div class="mb-6">
                <h1 class=Theme::TITLE>{title}</h1>
                <p class=Theme::SUBTLE>{subtitle}</p>
            </div>
            <div class="mb-5">
                <label class=Theme::LABEL for="identity">
                    "Username or email"
                </label>
                <input
                    id="identity"
                    type="text"
                    class=Theme::INPUT
                    autocomplete="username"
                    required
                    on:input=move |event| set_identity.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label class=Theme::LABEL for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    class=Theme::INPUT
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <div class="flex items-center justify-between mb-5">
                <A
                    href="/forgot-password"
                    {..}
                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                >
                    "Forgot password?"
                </A>
            </div>
            <Button button_type="submit" disabled=login_action.pending()>
                "Sign in"
            </Button>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        // A 401 here is bad credentials, not an expired session.
                        let message = if err.status() == Some(401) {
                            "Invalid username or password.".to_string()
                        } else {
                            err.to_string()
                        };
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::landing_path;
    use crate::features::auth::types::CurrentUser;

    fn user(is_staff: bool, is_approved: bool) -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "ada".to_string(),
            email: String::new(),
            is_staff,
            is_superuser: false,
            is_approved,
            email_verified: true,
            portfolio_published: false,
            username_slug: None,
        }
    }

    #[test]
    fn staff_land_in_the_admin_area() {
        assert_eq!(landing_path(Some(&user(true, true))), "/admin");
        assert_eq!(landing_path(Some(&user(true, false))), "/admin");
    }

    #[test]
    fn unapproved_members_land_on_pending_approval() {
        assert_eq!(landing_path(Some(&user(false, false))), "/pending-approval");
    }

    #[test]
    fn approved_members_and_unknown_profiles_land_on_the_dashboard() {
        assert_eq!(landing_path(Some(&user(false, true))), "/dashboard");
        assert_eq!(landing_path(None), "/dashboard");
    }
}
