//! Client wrappers for the portfolio content endpoints. Resources with file
//! fields (about, projects, skills) travel as multipart form data assembled by
//! the calling form; experience and education are plain JSON.

use crate::{
    app_lib::{api, AppError},
    features::portfolio::types::{
        AboutMe, Education, EducationPayload, Experience, ExperiencePayload, Project,
        PublicPortfolio, Skill, VisitorMessage,
    },
};
use web_sys::FormData;

/// Fetches the owner's about section, if one has been created yet. The
/// endpoint lists at most one record per owner.
pub async fn fetch_about() -> Result<Option<AboutMe>, AppError> {
    let listing = api::get_listing::<AboutMe>("/about/").await?;
    Ok(listing.items.into_iter().next())
}

/// Creates or updates the about section depending on whether one exists.
pub async fn save_about(existing: Option<i64>, form: FormData) -> Result<AboutMe, AppError> {
    match existing {
        Some(id) => api::put_form(&format!("/about/{id}/"), form).await,
        None => api::post_form("/about/", form).await,
    }
}

pub async fn list_projects() -> Result<Vec<Project>, AppError> {
    let listing = api::get_listing("/projects/").await?;
    Ok(listing.items)
}

pub async fn create_project(form: FormData) -> Result<Project, AppError> {
    api::post_form("/projects/", form).await
}

pub async fn update_project(id: i64, form: FormData) -> Result<Project, AppError> {
    api::put_form(&format!("/projects/{id}/"), form).await
}

pub async fn delete_project(id: i64) -> Result<(), AppError> {
    api::delete_resource(&format!("/projects/{id}/")).await
}

pub async fn list_skills() -> Result<Vec<Skill>, AppError> {
    let listing = api::get_listing("/skills/").await?;
    Ok(listing.items)
}

pub async fn create_skill(form: FormData) -> Result<Skill, AppError> {
    api::post_form("/skills/", form).await
}

pub async fn update_skill(id: i64, form: FormData) -> Result<Skill, AppError> {
    api::put_form(&format!("/skills/{id}/"), form).await
}

pub async fn delete_skill(id: i64) -> Result<(), AppError> {
    api::delete_resource(&format!("/skills/{id}/")).await
}

pub async fn list_experience() -> Result<Vec<Experience>, AppError> {
    let listing = api::get_listing("/experience/").await?;
    Ok(listing.items)
}

pub async fn create_experience(payload: &ExperiencePayload) -> Result<Experience, AppError> {
    api::post_json("/experience/", payload).await
}

pub async fn update_experience(
    id: i64,
    payload: &ExperiencePayload,
) -> Result<Experience, AppError> {
    api::put_json(&format!("/experience/{id}/"), payload).await
}

pub async fn delete_experience(id: i64) -> Result<(), AppError> {
    api::delete_resource(&format!("/experience/{id}/")).await
}

pub async fn list_education() -> Result<Vec<Education>, AppError> {
    let listing = api::get_listing("/education/").await?;
    Ok(listing.items)
}

pub async fn create_education(payload: &EducationPayload) -> Result<Education, AppError> {
    api::post_json("/education/", payload).await
}

pub async fn update_education(id: i64, payload: &EducationPayload) -> Result<Education, AppError> {
    api::put_json(&format!("/education/{id}/"), payload).await
}

pub async fn delete_education(id: i64) -> Result<(), AppError> {
    api::delete_resource(&format!("/education/{id}/")).await
}

/// Fetches a published portfolio by username. Unpublished and unknown
/// usernames both surface as a 404.
pub async fn fetch_public_portfolio(username: &str) -> Result<PublicPortfolio, AppError> {
    api::get_json(&format!("/portfolio/{username}/")).await
}

/// Submits the public contact form to the portfolio owner.
pub async fn send_visitor_message(
    username: &str,
    message: &VisitorMessage,
) -> Result<(), AppError> {
    api::post_json_discard(&format!("/portfolio/{username}/message/"), message).await
}
