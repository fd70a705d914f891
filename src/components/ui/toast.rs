//! Transient error toasts. The HTTP client pushes messages here as a side
//! effect of failure policy; routes never push toasts directly. The stack is a
//! process-wide signal because the client helpers run outside any component
//! scope.

use leptos::prelude::*;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    LazyLock,
};

/// How long a toast stays on screen (milliseconds).
const DISMISS_AFTER_MS: u32 = 5_000;

static TOASTS: LazyLock<ArcRwSignal<Vec<Toast>>> = LazyLock::new(ArcRwSignal::default);
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    message: String,
}

/// Shows an error toast that dismisses itself.
pub fn error(message: String) {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    TOASTS.update(|toasts| toasts.push(Toast { id, message }));
    gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || dismiss(id)).forget();
}

fn dismiss(id: u64) {
    TOASTS.update(|toasts| toasts.retain(|toast| toast.id != id));
}

/// Fixed-position toast stack. Mounted once at the application root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = TOASTS.clone();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm" aria-live="assertive">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="flex items-start gap-3 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-lg dark:border-red-400 dark:bg-red-900/80 dark:text-red-100">
                            <span class="material-symbols-outlined text-lg">"error"</span>
                            <p class="flex-1">{toast.message}</p>
                            <button
                                type="button"
                                class="text-red-400 hover:text-red-600 dark:hover:text-red-200"
                                aria-label="Dismiss"
                                on:click=move |_| dismiss(id)
                            >
                                <span class="material-symbols-outlined text-base">"close"</span>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
