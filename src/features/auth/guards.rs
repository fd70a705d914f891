//! Route guards. Each wraps page content and decides render-vs-redirect: a
//! spinner while checking, a client-side redirect on denial, the children once
//! authorized. Role-gated guards issue one `/auth/me/` call per mount through
//! the refreshing HTTP client; a response that arrives after navigation away
//! is dropped via `try_set` rather than raising.

use crate::components::Spinner;
use crate::features::auth::{
    client,
    gate::{self, Verdict},
    session,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::Redirect;

/// Admin-only gate: requires a valid local session plus a staff or superuser
/// role confirmed by the server. Verification failures deny (fail closed).
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    if !session::is_valid() {
        return view! { <Redirect path="/admin/login" /> }.into_any();
    }

    let verdict = RwSignal::new(None::<Verdict>);
    spawn_local(async move {
        let result = client::current_user().await;
        let _ = verdict.try_set(Some(gate::admin_verdict(&result)));
    });

    gate_view(children, verdict)
}

/// Approved-user gate: requires a valid local session plus server-confirmed
/// approval. Staff are redirected to the admin area; verification failures
/// allow (fail open), so a flaky network check cannot lock out a valid
/// session.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    if !session::is_valid() {
        return view! { <Redirect path="/login" /> }.into_any();
    }

    let verdict = RwSignal::new(None::<Verdict>);
    spawn_local(async move {
        let result = client::current_user().await;
        let _ = verdict.try_set(Some(gate::member_verdict(&result)));
    });

    gate_view(children, verdict)
}

/// Generic authenticated gate: local session validity only, no server
/// round-trip.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    if session::is_valid() {
        children().into_any()
    } else {
        view! { <Redirect path="/login" /> }.into_any()
    }
}

fn gate_view(children: ChildrenFn, verdict: RwSignal<Option<Verdict>>) -> AnyView {
    view! {
        {move || {
            let children = children.clone();
            match verdict.get() {
                None => view! {
                    <div class="min-h-screen flex items-center justify-center">
                        <Spinner />
                    </div>
                }
                .into_any(),
                Some(Verdict::Allow) => children().into_any(),
                Some(Verdict::Dashboard) => view! { <Redirect path="/dashboard" /> }.into_any(),
                Some(Verdict::AdminArea) => view! { <Redirect path="/admin" /> }.into_any(),
                Some(Verdict::PendingApproval) => {
                    view! { <Redirect path="/pending-approval" /> }.into_any()
                }
            }
        }}
    }
    .into_any()
}
