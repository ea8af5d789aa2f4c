use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};

use crate::api::models::{ContactSubmission, NewItem};
use crate::error::AppResult;
use crate::routes::pages::Html;
use crate::state::AppState;

pub const CONTACT_SUCCESS: &str = "Message sent successfully!";
pub const CONTACT_FAILURE: &str = "Failed to send message. Please try again.";

#[derive(Template)]
#[template(path = "components/contact_form.html")]
pub struct ContactFormTemplate {
    name: String,
    email: String,
    message: String,
    status: Option<ContactStatus>,
}

pub struct ContactStatus {
    text: &'static str,
    ok: bool,
}

impl ContactFormTemplate {
    /// The untouched form as the shell first shows it.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: None,
        }
    }

    fn sent() -> Self {
        Self {
            status: Some(ContactStatus {
                text: CONTACT_SUCCESS,
                ok: true,
            }),
            ..Self::empty()
        }
    }

    fn failed(submission: ContactSubmission) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            status: Some(ContactStatus {
                text: CONTACT_FAILURE,
                ok: false,
            }),
        }
    }
}

/// Contact submit: forward the submission to the backend's item-creation
/// endpoint and re-render the whole form region. Success clears the
/// fields; failure keeps what the visitor typed.
async fn submit(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> AppResult<impl IntoResponse> {
    let item = NewItem::from(submission.clone());
    let template = match state.api.create_item(&item).await {
        Some(_) => ContactFormTemplate::sent(),
        None => ContactFormTemplate::failed(submission),
    };
    Ok(Html(template))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }
    }

    #[test]
    fn empty_form_has_blank_fields_and_no_status() {
        let html = ContactFormTemplate::empty().render().unwrap();
        assert!(html.contains(r#"id="contactForm""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains(CONTACT_SUCCESS));
        assert!(!html.contains(CONTACT_FAILURE));
    }

    #[test]
    fn sent_form_clears_fields_and_shows_success() {
        let html = ContactFormTemplate::sent().render().unwrap();
        assert!(html.contains(CONTACT_SUCCESS));
        assert!(!html.contains("a@b.com"));
    }

    #[test]
    fn failed_form_keeps_fields_and_shows_failure() {
        let html = ContactFormTemplate::failed(submission()).render().unwrap();
        assert!(html.contains(CONTACT_FAILURE));
        assert!(html.contains(r#"value="A""#));
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(html.contains(">hi</textarea>"));
    }

    #[test]
    fn form_escapes_submitted_text() {
        let html = ContactFormTemplate::failed(ContactSubmission {
            name: r#""><script>"#.into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        })
        .render()
        .unwrap();
        assert!(!html.contains("<script>"));
    }
}
