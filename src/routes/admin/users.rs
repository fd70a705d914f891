//! Admin user table with approval and activation toggles. The listing
//! re-fetches whenever the page, the page size, or a toggle changes, so the
//! table always reflects the server's view.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, DashboardShell, Pagination, Spinner};
use crate::features::auth::RequireAdmin;
use crate::features::users::{client, types::UserSummary};
use leptos::prelude::*;

const DEFAULT_PAGE_SIZE: usize = 30;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RequireAdmin children=move || view! {
            <DashboardShell>
                <UsersTable />
            </DashboardShell>
        } />
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let (page, set_page) = signal(1usize);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);

    let users = LocalResource::new(move || {
        let page_value = page.get();
        let size_value = page_size.get();
        async move { client::list_users(page_value, size_value).await }
    });

    let approval_action = Action::new_local(move |input: &(i64, bool)| {
        let (user_id, is_approved) = *input;
        async move { client::set_approval(user_id, is_approved).await }
    });

    let status_action = Action::new_local(move |input: &(i64, bool)| {
        let (user_id, is_active) = *input;
        async move { client::set_status(user_id, is_active).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(_)) = approval_action.value().get() {
            users.refetch();
        }
    });

    Effect::new(move |_| {
        if let Some(Ok(_)) = status_action.value().get() {
            users.refetch();
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>"Users"</h1>
                <p class=Theme::SUBTLE>
                    {move || match users.get() {
                        Some(Ok(data)) => format!("{} accounts.", data.total_users),
                        _ => "Approve new members and manage accounts.".to_string(),
                    }}
                </p>
            </div>

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match users.get() {
                    Some(Ok(data)) => {
                        let total_pages = data.total_pages;
                        view! {
                            <div class="overflow-x-auto rounded-xl border border-gray-200 dark:border-gray-700">
                                <table class="w-full text-sm text-left text-gray-600 dark:text-gray-300">
                                    <thead class="text-xs uppercase bg-gray-50 dark:bg-gray-800 text-gray-500 dark:text-gray-400">
                                        <tr>
                                            <th class="px-4 py-3">"User"</th>
                                            <th class="px-4 py-3">"Joined"</th>
                                            <th class="px-4 py-3">"Role"</th>
                                            <th class="px-4 py-3">"Verified"</th>
                                            <th class="px-4 py-3">"Approved"</th>
                                            <th class="px-4 py-3">"Published"</th>
                                            <th class="px-4 py-3">"Active"</th>
                                            <th class="px-4 py-3 text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data
                                            .results
                                            .into_iter()
                                            .map(|user| {
                                                view! {
                                                    <UserRow
                                                        user=user
                                                        on_approval=Callback::new(move |input| {
                                                            approval_action.dispatch(input);
                                                        })
                                                        on_status=Callback::new(move |input| {
                                                            status_action.dispatch(input);
                                                        })
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                            <Pagination
                                page=page
                                total_pages=Signal::from(total_pages)
                                page_size=page_size
                                on_page=Callback::new(move |next| set_page.set(next))
                                on_page_size=Callback::new(move |size| {
                                    set_page_size.set(size);
                                    set_page.set(1);
                                })
                            />
                        }
                        .into_any()
                    }
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
fn UserRow(
    user: UserSummary,
    on_approval: Callback<(i64, bool)>,
    on_status: Callback<(i64, bool)>,
) -> impl IntoView {
    let id = user.id;
    let is_approved = user.profile.is_approved;
    let is_active = user.is_active;
    let role = if user.is_superuser {
        "Superuser"
    } else if user.is_staff {
        "Staff"
    } else {
        "Member"
    };
    let full_name = format!("{} {}", user.first_name, user.last_name)
        .trim()
        .to_string();
    // Dates arrive in ISO form; the date part is enough for the table.
    let joined = user
        .date_joined
        .as_deref()
        .map(|stamp| stamp.chars().take(10).collect::<String>())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <tr class="border-t border-gray-100 dark:border-gray-800 bg-white dark:bg-gray-900">
            <td class="px-4 py-3">
                <p class="font-medium text-gray-900 dark:text-white">{user.username.clone()}</p>
                <p class="text-xs text-gray-500">
                    {if full_name.is_empty() { user.email.clone() } else { full_name }}
                </p>
            </td>
            <td class="px-4 py-3">{joined}</td>
            <td class="px-4 py-3">{role}</td>
            <td class="px-4 py-3">
                <BoolBadge value=user.profile.email_verified />
            </td>
            <td class="px-4 py-3">
                <BoolBadge value=is_approved />
            </td>
            <td class="px-4 py-3">
                {match (user.profile.portfolio_published, user.profile.username_slug.clone()) {
                    (true, Some(slug)) => view! {
                        <a
                            href=format!("/{slug}")
                            target="_blank"
                            class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                        >
                            "View"
                        </a>
                    }
                    .into_any(),
                    (published, _) => view! { <BoolBadge value=published /> }.into_any(),
                }}
            </td>
            <td class="px-4 py-3">
                <BoolBadge value=is_active />
            </td>
            <td class="px-4 py-3 text-right space-x-3 whitespace-nowrap">
                <button
                    type="button"
                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                    on:click=move |_| on_approval.run((id, !is_approved))
                >
                    {if is_approved { "Revoke approval" } else { "Approve" }}
                </button>
                <button
                    type="button"
                    class=Theme::DANGER_LINK
                    on:click=move |_| on_status.run((id, !is_active))
                >
                    {if is_active { "Deactivate" } else { "Activate" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn BoolBadge(value: bool) -> impl IntoView {
    let (class, label) = if value {
        (
            "inline-block px-2 py-0.5 text-xs rounded-full bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300",
            "Yes",
        )
    } else {
        (
            "inline-block px-2 py-0.5 text-xs rounded-full bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400",
            "No",
        )
    };
    view! { <span class=class>{label}</span> }
}
