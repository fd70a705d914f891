//! Types for portfolio content resources. Image and file fields arrive as
//! server-side media URLs; uploads go out as multipart form data and never
//! appear in these types.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AboutMe {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub cv_file: Option<String>,
    #[serde(default)]
    pub years_of_experience: i32,
    #[serde(default)]
    pub clients: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub project_image: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_demo_link: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub icon_image: Option<String>,
}

/// Proficiency levels accepted by the skills endpoint.
pub const SKILL_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub role: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
}

/// Create/update payload for experience entries (the only portfolio resource
/// without file fields, so it travels as plain JSON).
#[derive(Clone, Debug, Serialize)]
pub struct ExperiencePayload {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub institution: String,
    pub degree: String,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update payload for education entries. JSON like experience.
#[derive(Clone, Debug, Serialize)]
pub struct EducationPayload {
    pub institution: String,
    pub degree: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub description: String,
}

/// Owner summary embedded in the public portfolio response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Aggregate response of `GET /portfolio/{username}/`: the owner profile plus
/// every published section. Missing sections decode as empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicPortfolio {
    pub profile: PublicProfile,
    #[serde(default)]
    pub about_me: Option<AboutMe>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
}

/// Contact form submission from a portfolio visitor.
#[derive(Clone, Debug, Serialize)]
pub struct VisitorMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_portfolio_decodes_with_missing_sections() {
        let body = r#"{"profile":{"username":"ada"}}"#;
        let portfolio: PublicPortfolio = serde_json::from_str(body).expect("decode");
        assert_eq!(portfolio.profile.username, "ada");
        assert!(portfolio.about_me.is_none());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.educations.is_empty());
    }

    #[test]
    fn public_portfolio_reads_the_plural_section_keys() {
        let body = r#"{
            "profile": {"username": "ada"},
            "experiences": [{"id": 1, "role": "Engineer", "company": "Acme",
                             "start_date": "2020-01-01", "description": ""}],
            "educations": [{"id": 2, "institution": "MIT", "degree": "BSc",
                            "start_year": 2014, "end_year": 2018}]
        }"#;
        let portfolio: PublicPortfolio = serde_json::from_str(body).expect("decode");
        assert_eq!(portfolio.experiences.len(), 1);
        assert_eq!(portfolio.educations.len(), 1);
        assert_eq!(portfolio.educations[0].institution, "MIT");
    }

    #[test]
    fn education_tolerates_an_open_ended_period() {
        let body = r#"{"id":4,"institution":"MIT","degree":"PhD","start_year":2019}"#;
        let education: Education = serde_json::from_str(body).expect("decode");
        assert_eq!(education.end_year, None);
        assert_eq!(education.description, None);
    }

    #[test]
    fn experience_tolerates_open_ended_roles() {
        let body = r#"{"id":3,"role":"Engineer","company":"Acme",
                       "start_date":"2020-01-01","end_date":null,"description":"..."}"#;
        let experience: Experience = serde_json::from_str(body).expect("decode");
        assert_eq!(experience.end_date, None);
    }

    #[test]
    fn skill_levels_match_backend_choices() {
        assert_eq!(SKILL_LEVELS, &["Beginner", "Intermediate", "Advanced"]);
    }
}
