use serde::{Deserialize, Serialize};

/// Profile object served by `GET /api/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub email: Option<String>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: SocialIcon,
}

/// Icon tag on a social entry. Tags the page carries no glyph for
/// deserialize as `Unknown` and render without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Linkedin,
    Github,
    #[default]
    #[serde(other)]
    Unknown,
}

const LINKEDIN_GLYPH: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.062 2.062 0 1 1 0-4.125 2.062 2.062 0 0 1 0 4.125zM7.119 20.452H3.555V9h3.564v11.452z"/></svg>"#;

const GITHUB_GLYPH: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12"/></svg>"#;

impl SocialIcon {
    /// Inline SVG markup for the glyph. Static trusted content, the one
    /// place templates bypass escaping. `Unknown` renders nothing.
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialIcon::Linkedin => LINKEDIN_GLYPH,
            SocialIcon::Github => GITHUB_GLYPH,
            SocialIcon::Unknown => "",
        }
    }
}

/// One project record from `GET /items/`. Every field is optional on the
/// wire; presentation fills the gaps.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(rename = "item_name")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Request body for the backend's `POST /create-item/` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// A contact-form submission as the page collects it. Converted into the
/// backend's generic item shape at the API boundary; the dummy price is
/// part of that endpoint's contract.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactSubmission> for NewItem {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            name: submission.name,
            price: 0.0,
            description: format!(
                "Email: {}, Message: {}",
                submission.email, submission.message
            ),
        }
    }
}
