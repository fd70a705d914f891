//! Password-reset completion page, reached from the emailed link. The reset
//! token rides in the path; the server rejects expired or unknown tokens.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::PasswordResetConfirmRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

const MIN_PASSWORD_CHARS: usize = 8;

/// Local validation mirroring the server's baseline rules.
fn validate(password: &str, confirm: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters."
        ));
    }
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let token = move || params.get().get("token").unwrap_or_default().to_string();

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (done, set_done) = signal(false);

    let reset_action = Action::new_local(move |input: &(String, PasswordResetConfirmRequest)| {
        let (token, request) = input.clone();
        async move { client::confirm_password_reset(&token, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => set_done.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();
        if let Err(message) = validate(&password_value, &confirm_value) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        reset_action.dispatch((
            token(),
            PasswordResetConfirmRequest {
                new_password: password_value,
                new_password_confirm: confirm_value,
            },
        ));
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <Show
                    when=move || done.get()
                    fallback=move || {
                        view! {
                            <form on:submit=on_submit>
                                <div class="mb-6">
                                    <h1 class=Theme::TITLE>"Choose a new password"</h1>
                                    <p class=Theme::SUBTLE>
                                        "You'll sign in with it right after."
                                    </p>
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL for="new-password">"New password"</label>
                                    <input
                                        id="new-password"
                                        type="password"
                                        class=Theme::INPUT
                                        autocomplete="new-password"
                                        required
                                        on:input=move |event| set_password.set(event_target_value(&event))
                                    />
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL for="confirm-new-password">
                                        "Confirm new password"
                                    </label>
                                    <input
                                        id="confirm-new-password"
                                        type="password"
                                        class=Theme::INPUT
                                        autocomplete="new-password"
                                        required
                                        on:input=move |event| set_confirm.set(event_target_value(&event))
                                    />
                                </div>
                                <Button button_type="submit" disabled=reset_action.pending()>
                                    "Reset password"
                                </Button>
                                {move || {
                                    reset_action
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
                        }
                    }
                >
                    <div class="space-y-4">
                        <Alert
                            kind=AlertKind::Success
                            message="Password reset. You can sign in with the new one.".to_string()
                        />
                        <A
                            href="/login"
                            {..}
                            class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                        >
                            "Go to sign in"
                        </A>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn accepts_matching_passwords_of_minimum_length() {
        assert!(validate("longenough", "longenough").is_ok());
    }

    #[test]
    fn rejects_short_or_mismatched_passwords() {
        assert!(validate("short", "short").is_err());
        assert!(validate("longenough", "different").is_err());
    }
}
