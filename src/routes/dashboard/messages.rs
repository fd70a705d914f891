//! Inbox for contact-form messages. The listing is role-scoped server-side,
//! so the same inbox serves the owner dashboard and the admin area; only the
//! surrounding guard differs.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::messages::{
    client,
    types::{ContactMessage, MessageStatus},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn DashboardMessagesPage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <MessagesInbox subtitle="Messages sent through your public page." />
            </DashboardShell>
        } />
    }
}

#[component]
pub(crate) fn MessagesInbox(subtitle: &'static str) -> impl IntoView {
    let inbox = LocalResource::new(|| client::list_messages());
    // Message id whose reply form is open, if any.
    let replying = RwSignal::new(None::<i64>);

    let read_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::mark_read(id).await }
    });
    let archive_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::archive_message(id).await }
    });
    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_message(id).await }
    });
    let reply_action = Action::new_local(move |input: &(i64, String)| {
        let (id, text) = input.clone();
        async move { client::reply_to_message(id, &text).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = read_action.value().get() {
            inbox.refetch();
        }
    });
    Effect::new(move |_| {
        if let Some(Ok(())) = archive_action.value().get() {
            inbox.refetch();
        }
    });
    Effect::new(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            inbox.refetch();
        }
    });
    Effect::new(move |_| {
        if let Some(Ok(())) = reply_action.value().get() {
            replying.set(None);
            inbox.refetch();
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>"Messages"</h1>
                <p class=Theme::SUBTLE>{subtitle}</p>
            </div>

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match inbox.get() {
                    Some(Ok(items)) if items.is_empty() => {
                        view! { <p class=Theme::SUBTLE>"No messages yet."</p> }.into_any()
                    }
                    Some(Ok(items)) => view! {
                        <ul class="space-y-4">
                            {items
                                .into_iter()
                                .map(|message| {
                                    view! {
                                        <MessageCard
                                            message=message
                                            replying=replying
                                            on_read=Callback::new(move |id| {
                                                read_action.dispatch(id);
                                            })
                                            on_archive=Callback::new(move |id| {
                                                archive_action.dispatch(id);
                                            })
                                            on_delete=Callback::new(move |id| {
                                                delete_action.dispatch(id);
                                            })
                                            on_reply=Callback::new(move |input| {
                                                reply_action.dispatch(input);
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn MessageCard(
    message: ContactMessage,
    replying: RwSignal<Option<i64>>,
    on_read: Callback<i64>,
    on_archive: Callback<i64>,
    on_delete: Callback<i64>,
    on_reply: Callback<(i64, String)>,
) -> impl IntoView {
    let id = message.id;
    let status = message.status;
    // Dates arrive in ISO form; the date part is enough for the card.
    let received = message
        .created_at
        .as_deref()
        .map(|stamp| stamp.chars().take(10).collect::<String>())
        .unwrap_or_default();

    view! {
        <li class=Theme::CARD>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <div class="flex items-center gap-3">
                        <h2 class="font-semibold text-gray-900 dark:text-white">
                            {message.name.clone()}
                        </h2>
                        <StatusBadge status=status />
                    </div>
                    <p class="text-xs text-gray-500">
                        {format!("{} · {}", message.email, received)}
                    </p>
                    <p class="text-sm text-gray-600 dark:text-gray-300 mt-2">
                        {message.message.clone()}
                    </p>
                    {message
                        .reply
                        .clone()
                        .map(|text| {
                            view! {
                                <p class="text-sm text-gray-500 mt-2 pl-3 border-l-2 border-indigo-200 dark:border-indigo-800">
                                    {format!("You replied: {text}")}
                                </p>
                            }
                        })}
                </div>
                <div class="flex items-center gap-3 shrink-0">
                    {(status == MessageStatus::New)
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                    on:click=move |_| on_read.run(id)
                                >
                                    "Mark read"
                                </button>
                            }
                        })}
                    <button
                        type="button"
                        class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                        on:click=move |_| replying.set(Some(id))
                    >
                        "Reply"
                    </button>
                    {(status != MessageStatus::Archived)
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="text-sm font-medium text-gray-500 hover:text-gray-700 dark:hover:text-gray-300"
                                    on:click=move |_| on_archive.run(id)
                                >
                                    "Archive"
                                </button>
                            }
                        })}
                    <button
                        type="button"
                        class=Theme::DANGER_LINK
                        on:click=move |_| on_delete.run(id)
                    >
                        "Delete"
                    </button>
                </div>
            </div>

            <Show when=move || replying.get() == Some(id)>
                <ReplyForm
                    on_send=Callback::new(move |text| on_reply.run((id, text)))
                    on_cancel=Callback::new(move |()| replying.set(None))
                />
            </Show>
        </li>
    }
}

#[component]
fn ReplyForm(on_send: Callback<String>, on_cancel: Callback<()>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let text = draft.get_untracked().trim().to_string();
        if !text.is_empty() {
            on_send.run(text);
        }
    };

    view! {
        <form class="mt-4 space-y-3" on:submit=on_submit>
            <textarea
                class=Theme::INPUT
                rows="3"
                placeholder="Write your reply; it is emailed to the sender."
                required
                on:input=move |event| set_draft.set(event_target_value(&event))
            ></textarea>
            <div class="flex items-center gap-4">
                <Button button_type="submit">"Send reply"</Button>
                <button
                    type="button"
                    class="text-sm font-medium text-gray-500 hover:text-gray-700 dark:hover:text-gray-300"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn StatusBadge(status: MessageStatus) -> impl IntoView {
    let class = match status {
        MessageStatus::New => {
            "inline-block px-2 py-0.5 text-xs rounded-full bg-indigo-100 text-indigo-700 dark:bg-indigo-900/40 dark:text-indigo-300"
        }
        MessageStatus::Replied => {
            "inline-block px-2 py-0.5 text-xs rounded-full bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300"
        }
        MessageStatus::Read | MessageStatus::Archived => {
            "inline-block px-2 py-0.5 text-xs rounded-full bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400"
        }
    };
    view! { <span class=class>{status.label()}</span> }
}
