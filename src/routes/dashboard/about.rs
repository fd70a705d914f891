//! About section editor. One record per owner; the form creates it on first
//! save and updates it afterwards. Image and CV uploads ride along as
//! multipart fields only when a new file was picked, so saving text changes
//! never clears an existing upload.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, Button, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::portfolio::{client, types::AboutMe};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::{FormData, HtmlInputElement};

#[component]
pub fn DashboardAboutPage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <AboutEditor />
            </DashboardShell>
        } />
    }
}

#[component]
fn AboutEditor() -> impl IntoView {
    let existing = LocalResource::new(|| client::fetch_about());

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>"About"</h1>
                <p class=Theme::SUBTLE>"Who you are, in your own words."</p>
            </div>
            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match existing.get() {
                    Some(Ok(about)) => view! { <AboutForm about=about /> }.into_any(),
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
fn AboutForm(about: Option<AboutMe>) -> impl IntoView {
    let record_id = about.as_ref().map(|about| about.id);
    let initial = about.unwrap_or_else(|| AboutMe {
        id: 0,
        name: String::new(),
        title: String::new(),
        bio: String::new(),
        profile_image: None,
        cv_file: None,
        years_of_experience: 0,
        clients: None,
    });

    let (name, set_name) = signal(initial.name);
    let (title, set_title) = signal(initial.title);
    let (bio, set_bio) = signal(initial.bio);
    let (years, set_years) = signal(initial.years_of_experience.to_string());
    let (clients, set_clients) = signal(
        initial
            .clients
            .map(|count| count.to_string())
            .unwrap_or_default(),
    );
    let profile_image = RwSignal::new_local(None::<web_sys::File>);
    let cv_file = RwSignal::new_local(None::<web_sys::File>);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saved, set_saved) = signal(false);

    let save_action = Action::new_local(move |form: &FormData| {
        let form = form.clone();
        async move { client::save_about(record_id, form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => set_saved.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some(AppError::Config("Name is required.".to_string())));
            return;
        }

        let form = match FormData::new() {
            Ok(form) => form,
            Err(_) => {
                set_error.set(Some(AppError::Config(
                    "Could not prepare the upload.".to_string(),
                )));
                return;
            }
        };
        let _ = form.append_with_str("name", &name_value);
        let _ = form.append_with_str("title", title.get_untracked().trim());
        let _ = form.append_with_str("bio", bio.get_untracked().trim());
        let _ = form.append_with_str("years_of_experience", years.get_untracked().trim());
        let clients_value = clients.get_untracked().trim().to_string();
        if !clients_value.is_empty() {
            let _ = form.append_with_str("clients", &clients_value);
        }
        if let Some(file) = profile_image.get_untracked() {
            let _ = form.append_with_blob("profile_image", &file);
        }
        if let Some(file) = cv_file.get_untracked() {
            let _ = form.append_with_blob("cv_file", &file);
        }

        save_action.dispatch(form);
    };

    view! {
        <form class="max-w-xl space-y-5" on:submit=on_submit>
            <div>
                <label class=Theme::LABEL for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    class=Theme::INPUT
                    required
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="title">"Headline"</label>
                <input
                    id="title"
                    type="text"
                    class=Theme::INPUT
                    placeholder="Systems Engineer"
                    prop:value=move || title.get()
                    on:input=move |event| set_title.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="bio">"Bio"</label>
                <textarea
                    id="bio"
                    class=Theme::INPUT
                    rows="5"
                    prop:value=move || bio.get()
                    on:input=move |event| set_bio.set(event_target_value(&event))
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="years">"Years of experience"</label>
                    <input
                        id="years"
                        type="number"
                        min="0"
                        class=Theme::INPUT
                        prop:value=move || years.get()
                        on:input=move |event| set_years.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="clients">"Clients (optional)"</label>
                    <input
                        id="clients"
                        type="number"
                        min="0"
                        class=Theme::INPUT
                        prop:value=move || clients.get()
                        on:input=move |event| set_clients.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div>
                <label class=Theme::LABEL for="profile-image">"Profile photo"</label>
                <input
                    id="profile-image"
                    type="file"
                    accept="image/*"
                    class=Theme::INPUT
                    on:change=move |event| {
                        let input = event_target::<HtmlInputElement>(&event);
                        profile_image.set(input.files().and_then(|files| files.get(0)));
                    }
                />
            </div>
            <div>
                <label class=Theme::LABEL for="cv-file">"CV (PDF)"</label>
                <input
                    id="cv-file"
                    type="file"
                    accept=".pdf"
                    class=Theme::INPUT
                    on:change=move |event| {
                        let input = event_target::<HtmlInputElement>(&event);
                        cv_file.set(input.files().and_then(|files| files.get(0)));
                    }
                />
            </div>
            <Button button_type="submit" disabled=save_action.pending()>
                "Save"
            </Button>
            {move || {
                save_action
                    .pending()
                    .get()
                    .then_some(view! { <div><Spinner /></div> })
            }}
            {move || {
                saved
                    .get()
                    .then_some(view! {
                        <Alert kind=AlertKind::Success message="Saved.".to_string() />
                    })
            }}
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}
