//! Account registration. A new account must verify its email with a one-time
//! code before it can sign in, so success navigates to the verification page
//! with the email carried in the query string.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_CHARS: usize = 8;

/// Local validation mirroring the server's baseline rules, so obvious
/// mistakes never leave the browser.
fn validate(request: &RegisterRequest, confirm: &str) -> Result<(), String> {
    if request.username.trim().is_empty() || request.email.trim().is_empty() {
        return Err("Username and email are required.".to_string());
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters."
        ));
    }
    if request.password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await.map(|_| request.email) }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(email_value) => {
                    navigate(
                        &format!("/verify-email?email={email_value}"),
                        Default::default(),
                    );
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let request = RegisterRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
        };
        if let Err(message) = validate(&request, &confirm.get_untracked()) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        register_action.dispatch(request);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-6">
                    <h1 class=Theme::TITLE>"Create your account"</h1>
                    <p class=Theme::SUBTLE>"You'll verify your email right after."</p>
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="grid grid-cols-2 gap-4 mb-5">
                    <div>
                        <label class=Theme::LABEL for="first-name">"First name"</label>
                        <input
                            id="first-name"
                            type="text"
                            class=Theme::INPUT
                            autocomplete="given-name"
                            on:input=move |event| set_first_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="last-name">"Last name"</label>
                        <input
                            id="last-name"
                            type="text"
                            class=Theme::INPUT
                            autocomplete="family-name"
                            on:input=move |event| set_last_name.set(event_target_value(&event))
                        />
                    </div>
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_confirm.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            // Server validation text stands on its own.
                            let message = match &err {
                                AppError::Http { message, .. } if err.is_validation() => {
                                    message.clone()
                                }
                                other => other.to_string(),
                            };
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str) -> RegisterRequest {
        RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    #[test]
    fn accepts_matching_passwords_of_minimum_length() {
        assert!(validate(&request("longenough"), "longenough").is_ok());
    }

    #[test]
    fn rejects_short_or_mismatched_passwords() {
        assert!(validate(&request("short"), "short").is_err());
        assert!(validate(&request("longenough"), "different").is_err());
    }
}
