use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::api::models::{Profile, Project, Social};
use crate::api::{ApiClient, PROJECT_PAGE_SIZE};
use crate::error::AppResult;
use crate::routes::pages::Html;
use crate::state::AppState;

/// Placeholder description for projects the backend returns without one.
pub const PROJECT_DESCRIPTION_FALLBACK: &str = "No description available.";

#[derive(Template)]
#[template(path = "components/about_section.html")]
pub struct AboutSection {
    profile: Option<AboutProfile>,
}

pub struct AboutProfile {
    name: String,
    bio: String,
    image_url: String,
    email: Option<String>,
    socials: Vec<Social>,
}

impl AboutSection {
    /// A failed fetch renders the fixed error text in the bio slot; there
    /// is no partial profile.
    pub fn new(profile: Option<Profile>, api: &ApiClient) -> Self {
        let profile = profile.map(|p| AboutProfile {
            image_url: api.resolve(&p.image_url),
            name: p.name,
            bio: p.bio,
            email: p.email,
            socials: p.socials,
        });
        Self { profile }
    }
}

#[derive(Template)]
#[template(path = "components/projects_section.html")]
pub struct ProjectsSection {
    projects: Vec<ProjectCard>,
}

pub struct ProjectCard {
    name: String,
    description: String,
    technologies: Vec<String>,
}

impl ProjectsSection {
    /// A failed fetch and an empty result render the same fallback line.
    /// Cards keep the backend's order; missing fields get a positional
    /// label and the placeholder description.
    pub fn new(projects: Option<Vec<Project>>) -> Self {
        let projects = projects
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, p)| ProjectCard {
                name: p.name.unwrap_or_else(|| format!("Project {}", i + 1)),
                description: p
                    .description
                    .unwrap_or_else(|| PROJECT_DESCRIPTION_FALLBACK.to_string()),
                technologies: p.technologies,
            })
            .collect();
        Self { projects }
    }
}

#[derive(Template)]
#[template(path = "components/skills_section.html")]
pub struct SkillsSection {
    skills: Vec<String>,
}

impl SkillsSection {
    pub fn new(skills: Option<Vec<String>>) -> Self {
        Self {
            skills: skills.unwrap_or_default(),
        }
    }
}

async fn about(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = state.api.profile().await;
    Ok(Html(AboutSection::new(profile, &state.api)))
}

async fn projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.api.projects(PROJECT_PAGE_SIZE).await;
    Ok(Html(ProjectsSection::new(projects)))
}

async fn skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = state.api.skills().await;
    Ok(Html(SkillsSection::new(skills)))
}

/// Section fragment router. Each endpoint is one populate operation:
/// fetch one upstream resource, render the region or its fallback.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sections/about", get(about))
        .route("/sections/projects", get(projects))
        .route("/sections/skills", get(skills))
}
