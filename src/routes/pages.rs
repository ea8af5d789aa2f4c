use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::AppResult;
use crate::routes::contact::ContactFormTemplate;

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub contact: ContactFormTemplate,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// Page shell. Every section is a placeholder that fetches its populated
/// fragment on load; the shell itself never waits on the backend.
pub async fn index() -> AppResult<Response> {
    let template = IndexTemplate {
        contact: ContactFormTemplate::empty(),
    };
    Ok(Html(template).into_response())
}
