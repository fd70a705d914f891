//! Admin view of the contact-message inbox. Same inbox as the owner
//! dashboard; the listing endpoint returns every user's messages for staff.

use crate::components::DashboardShell;
use crate::features::auth::RequireAdmin;
use crate::routes::dashboard::MessagesInbox;
use leptos::prelude::*;

#[component]
pub fn AdminMessagesPage() -> impl IntoView {
    view! {
        <RequireAdmin children=move || view! {
            <DashboardShell>
                <MessagesInbox subtitle="Messages across all portfolios." />
            </DashboardShell>
        } />
    }
}
