//! Holding page for verified accounts awaiting approval. Gated only on a
//! valid session; the role-gated guards redirect here when the server reports
//! an unapproved account.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::auth::RequireAuth;
use leptos::prelude::*;

#[component]
pub fn PendingApprovalPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=move || view! {
                <div class="max-w-lg mx-auto text-center py-16 space-y-4">
                    <span class="material-symbols-outlined text-5xl text-amber-500">
                        "hourglass_top"
                    </span>
                    <h1 class=Theme::TITLE>"Almost there"</h1>
                    <p class=Theme::SUBTLE>
                        "Your account is waiting for approval. You'll be able to build and publish your portfolio once an administrator approves it."
                    </p>
                </div>
            } />
        </AppShell>
    }
}
