//! Public portfolio page, served at `/:username`. No session is required; the
//! server only returns published portfolios, and anything else renders the
//! not-found content. Reserved application paths are rejected before any
//! request goes out.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::portfolio::{
    client, is_reserved_slug,
    types::{PublicPortfolio, VisitorMessage},
};
use crate::routes::not_found::NotFoundContent;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let params = use_params_map();
    let username = move || params.get().get("username").unwrap_or_default().to_string();

    let portfolio = LocalResource::new(move || {
        let username = username();
        async move {
            if is_reserved_slug(&username) {
                return Err(AppError::Http {
                    status: 404,
                    message: "Not found.".to_string(),
                });
            }
            client::fetch_public_portfolio(&username).await
        }
    });

    view! {
        <AppShell>
            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match portfolio.get() {
                    Some(Ok(data)) => view! { <PortfolioContent data=data /> }.into_any(),
                    // Unknown username and unpublished portfolio look the same
                    // to a visitor.
                    Some(Err(AppError::Http { status: 404 | 403, .. })) => {
                        view! { <NotFoundContent /> }.into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </AppShell>
    }
}

#[component]
fn PortfolioContent(data: PublicPortfolio) -> impl IntoView {
    let username = data.profile.username.clone();
    let profile_name = format!("{} {}", data.profile.first_name, data.profile.last_name)
        .trim()
        .to_string();
    let display_name = data
        .about_me
        .as_ref()
        .map(|about| about.name.clone())
        .filter(|name| !name.is_empty())
        .or_else(|| (!profile_name.is_empty()).then_some(profile_name))
        .unwrap_or_else(|| data.profile.username.clone());

    view! {
        <div class="max-w-3xl mx-auto space-y-12">
            <section class="text-center space-y-4 py-8">
                {data
                    .about_me
                    .as_ref()
                    .and_then(|about| about.profile_image.clone())
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt="Profile photo"
                                class="w-28 h-28 rounded-full object-cover mx-auto"
                            />
                        }
                    })}
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{display_name}</h1>
                {data
                    .about_me
                    .as_ref()
                    .map(|about| {
                        view! {
                            <p class="text-lg text-indigo-600 dark:text-indigo-400">
                                {about.title.clone()}
                            </p>
                            <p class="text-gray-500 dark:text-gray-400 max-w-xl mx-auto">
                                {about.bio.clone()}
                            </p>
                        }
                    })}
                {data
                    .about_me
                    .as_ref()
                    .filter(|about| about.years_of_experience > 0)
                    .map(|about| {
                        let stats = match about.clients {
                            Some(clients) if clients > 0 => format!(
                                "{}+ years of experience · {} clients",
                                about.years_of_experience, clients
                            ),
                            _ => format!("{}+ years of experience", about.years_of_experience),
                        };
                        view! { <p class="text-sm text-gray-400">{stats}</p> }
                    })}
                {data
                    .about_me
                    .as_ref()
                    .and_then(|about| about.cv_file.clone())
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                class="inline-flex items-center gap-2 text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                            >
                                <span class="material-symbols-outlined text-base">"download"</span>
                                "Download CV"
                            </a>
                        }
                    })}
            </section>

            {(!data.projects.is_empty())
                .then(|| {
                    view! {
                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                "Projects"
                            </h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {data
                                    .projects
                                    .iter()
                                    .map(|project| {
                                        view! {
                                            <div class=Theme::CARD>
                                                {project
                                                    .project_image
                                                    .clone()
                                                    .map(|src| {
                                                        view! {
                                                            <img
                                                                src=src
                                                                alt=project.title.clone()
                                                                class="w-full h-40 object-cover rounded-lg mb-4"
                                                            />
                                                        }
                                                    })}
                                                <h3 class="font-semibold text-gray-900 dark:text-white">
                                                    {project.title.clone()}
                                                </h3>
                                                <p class="text-sm text-gray-500 mt-1">
                                                    {project.description.clone()}
                                                </p>
                                                <div class="flex items-center gap-4 mt-3">
                                                    {project
                                                        .github_link
                                                        .clone()
                                                        .map(|href| {
                                                            view! {
                                                                <a
                                                                    href=href
                                                                    target="_blank"
                                                                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                                                >
                                                                    "Source"
                                                                </a>
                                                            }
                                                        })}
                                                    {project
                                                        .live_demo_link
                                                        .clone()
                                                        .map(|href| {
                                                            view! {
                                                                <a
                                                                    href=href
                                                                    target="_blank"
                                                                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                                                >
                                                                    "Live demo"
                                                                </a>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })}

            {(!data.skills.is_empty())
                .then(|| {
                    view! {
                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                "Skills"
                            </h2>
                            <div class="flex flex-wrap gap-3">
                                {data
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-full bg-indigo-50 text-indigo-700 dark:bg-indigo-900/40 dark:text-indigo-300">
                                                {skill
                                                    .icon_image
                                                    .clone()
                                                    .map(|src| {
                                                        view! {
                                                            <img
                                                                src=src
                                                                alt=""
                                                                class="w-4 h-4 rounded-sm object-cover"
                                                            />
                                                        }
                                                    })}
                                                {skill.name.clone()}
                                                <span class="text-xs text-indigo-400">
                                                    {skill.level.clone()}
                                                </span>
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })}

            {(!data.experiences.is_empty())
                .then(|| {
                    view! {
                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                "Experience"
                            </h2>
                            <ul class="space-y-4">
                                {data
                                    .experiences
                                    .iter()
                                    .map(|entry| {
                                        let period = match &entry.end_date {
                                            Some(end) => format!("{} - {}", entry.start_date, end),
                                            None => format!("{} - present", entry.start_date),
                                        };
                                        view! {
                                            <li class=Theme::CARD>
                                                <h3 class="font-semibold text-gray-900 dark:text-white">
                                                    {format!("{} at {}", entry.role, entry.company)}
                                                </h3>
                                                <p class="text-sm text-gray-500">{period}</p>
                                                <p class="text-sm text-gray-500 mt-1">
                                                    {entry.description.clone()}
                                                </p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}

            {(!data.educations.is_empty())
                .then(|| {
                    view! {
                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                "Education"
                            </h2>
                            <ul class="space-y-4">
                                {data
                                    .educations
                                    .iter()
                                    .map(|entry| {
                                        let period = match entry.end_year {
                                            Some(end) => format!("{} - {}", entry.start_year, end),
                                            None => format!("{} - present", entry.start_year),
                                        };
                                        view! {
                                            <li class=Theme::CARD>
                                                <h3 class="font-semibold text-gray-900 dark:text-white">
                                                    {format!("{}, {}", entry.degree, entry.institution)}
                                                </h3>
                                                <p class="text-sm text-gray-500">{period}</p>
                                                {entry
                                                    .description
                                                    .clone()
                                                    .map(|text| {
                                                        view! {
                                                            <p class="text-sm text-gray-500 mt-1">{text}</p>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}

            <ContactSection username=username />
        </div>
    }
}

#[component]
fn ContactSection(username: String) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (sent, set_sent) = signal(false);

    let send_action = Action::new_local(move |input: &(String, VisitorMessage)| {
        let (username, payload) = input.clone();
        async move { client::send_visitor_message(&username, &payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => set_sent.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let message_value = message.get_untracked().trim().to_string();
        if name_value.is_empty() || email_value.is_empty() || message_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Name, email, and message are required.".to_string(),
            )));
            return;
        }

        send_action.dispatch((
            username.clone(),
            VisitorMessage {
                name: name_value,
                email: email_value,
                message: message_value,
            },
        ));
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Get in touch"</h2>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form class="space-y-5" on:submit=on_submit.clone()>
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class=Theme::LABEL for="contact-name">"Name"</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        class=Theme::INPUT
                                        required
                                        on:input=move |event| set_name.set(event_target_value(&event))
                                    />
                                </div>
                                <div>
                                    <label class=Theme::LABEL for="contact-email">"Email"</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        class=Theme::INPUT
                                        required
                                        on:input=move |event| set_email.set(event_target_value(&event))
                                    />
                                </div>
                            </div>
                            <div>
                                <label class=Theme::LABEL for="contact-message">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    class=Theme::INPUT
                                    rows="4"
                                    required
                                    on:input=move |event| set_message.set(event_target_value(&event))
                                ></textarea>
                            </div>
                            <Button button_type="submit" disabled=send_action.pending()>
                                "Send message"
                            </Button>
                            {move || {
                                error
                                    .get()
                                    .map(|err| {
                                        view! {
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        }
                                    })
                            }}
                        </form>
                    }
                }
            >
                <Alert
                    kind=AlertKind::Success
                    message="Message sent. Thanks for reaching out!".to_string()
                />
            </Show>
        </section>
    }
}
