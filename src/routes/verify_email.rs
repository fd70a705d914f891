//! Email verification with a one-time code. The registration flow navigates
//! here with the email in the query string; the user types the code from the
//! email. A resend control requests a fresh code for the same address.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::VerifyEmailOtpRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_query_map};

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let initial_email = query
        .get_untracked()
        .get("email")
        .unwrap_or_default()
        .to_string();

    let (email, set_email) = signal(initial_email);
    let (otp, set_otp) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (verified, set_verified) = signal(false);
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let verify_action = Action::new_local(move |request: &VerifyEmailOtpRequest| {
        let request = request.clone();
        async move { client::verify_email_otp(&request).await }
    });

    let resend_action = Action::new_local(move |email_value: &String| {
        let email_value = email_value.clone();
        async move { client::resend_verification_otp(&email_value).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => set_verified.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => set_resend_status.set(ResendStatus::Success),
                Err(err) => set_resend_status.set(ResendStatus::Error(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let otp_value = otp.get_untracked().trim().to_string();
        if email_value.is_empty() || otp_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and verification code are required.".to_string(),
            )));
            return;
        }

        verify_action.dispatch(VerifyEmailOtpRequest {
            email: email_value,
            otp: otp_value,
        });
    };

    let on_resend = move |_| {
        set_resend_status.set(ResendStatus::Idle);
        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_resend_status.set(ResendStatus::Error(
                "Enter your email to request a new code.".to_string(),
            ));
            return;
        }
        resend_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <div class="mb-6">
                    <h1 class=Theme::TITLE>"Verify your email"</h1>
                    <p class=Theme::SUBTLE>"Enter the code we sent you."</p>
                </div>
                <Show
                    when=move || verified.get()
                    fallback=move || {
                        view! {
                            <form on:submit=on_submit>
                                <div class="mb-5">
                                    <label class=Theme::LABEL for="email">"Email"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        class=Theme::INPUT
                                        autocomplete="email"
                                        required
                                        prop:value=move || email.get()
                                        on:input=move |event| set_email.set(event_target_value(&event))
                                    />
                                </div>
                                <div class="mb-5">
                                    <label class=Theme::LABEL for="otp">"Verification code"</label>
                                    <input
                                        id="otp"
                                        type="text"
                                        class=Theme::INPUT
                                        inputmode="numeric"
                                        autocomplete="one-time-code"
                                        required
                                        on:input=move |event| set_otp.set(event_target_value(&event))
                                    />
                                </div>
                                <div class="flex items-center gap-4">
                                    <Button button_type="submit" disabled=verify_action.pending()>
                                        "Verify"
                                    </Button>
                                    <button
                                        type="button"
                                        class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                        disabled=move || resend_action.pending().get()
                                        on:click=on_resend
                                    >
                                        "Resend code"
                                    </button>
                                </div>
                                {move || {
                                    verify_action
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
                                {move || match resend_status.get() {
                                    ResendStatus::Idle => None,
                                    ResendStatus::Success => Some(
                                        view! {
                                            <div class="mt-4">
                                                <Alert
                                                    kind=AlertKind::Success
                                                    message="A new code is on the way.".to_string()
                                                />
                                            </div>
                                        },
                                    ),
                                    ResendStatus::Error(message) => Some(
                                        view! {
                                            <div class="mt-4">
                                                <Alert kind=AlertKind::Error message=message />
                                            </div>
                                        },
                                    ),
                                }}
                            </form>
                        }
                    }
                >
                    <div class="space-y-4">
                        <Alert
                            kind=AlertKind::Success
                            message="Email verified. You can sign in now.".to_string()
                        />
                        <A
                            href="/login"
                            {..}
                            class="inline-block text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                        >
                            "Continue to sign in"
                        </A>
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
