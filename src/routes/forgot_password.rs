//! Password-reset request page. Submitting always shows the same
//! confirmation; the server never reveals whether the address has an account.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (sent, set_sent) = signal(false);

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::request_password_reset(&email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(()) => set_sent.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_error.set(Some(AppError::Config("Email is required.".to_string())));
            return;
        }
        request_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <form on:submit=on_submit>
                                <div class="mb-6">
                                    <h1 class=Theme::TITLE>"Reset your password"</h1>
                                    <p class=Theme::SUBTLE>
                                        "Enter your account email and we'll send a reset link."
                                    </p>
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL for="reset-email">"Email"</label>
                                    <input
                                        id="reset-email"
                                        type="email"
                                        class=Theme::INPUT
                                        autocomplete="email"
                                        required
                                        on:input=move |event| set_email.set(event_target_value(&event))
                                    />
                                </div>
                                <Button button_type="submit" disabled=request_action.pending()>
                                    "Send reset link"
                                </Button>
                                {move || {
                                    request_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                                }}
                                {move || {
                                    error
                                        .get()
                                        .map(|err| {
                                            view! {
                                                <div class="mt-4">
                                                    <Alert kind=AlertKind::Error message=err.to_string() />
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
                            message="If an account exists with that email, a reset link is on its way."
                                .to_string()
                        />
                        <A
                            href="/login"
                            {..}
                            class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                        >
                            "Back to sign in"
                        </A>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
