use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

pub mod models;

use models::{NewItem, Profile, Project};

/// How many projects one page load asks the backend for.
pub const PROJECT_PAGE_SIZE: usize = 6;

/// Client for the backend portfolio API. The single point of entry for
/// upstream calls; routes never touch reqwest directly.
///
/// Failure contract: transport errors, non-2xx statuses, and unparsable
/// JSON all collapse to `None`. Callers render fallback content instead
/// of distinguishing the cause. No retries, no request timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a possibly-relative path returned by the backend (e.g. a
    /// profile image under its `/static` mount) against the API origin so
    /// the browser can fetch it. Absolute URLs pass through unchanged.
    pub fn resolve(&self, path: &str) -> String {
        match self.base_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => path.to_string(),
        }
    }

    /// GET `path_and_query` relative to the base URL and decode the JSON
    /// body. `None` on any failure, with a diagnostic on the log.
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Option<T> {
        let url = match self.base_url.join(path_and_query) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid API path {}: {}", path_and_query, e);
                return None;
            }
        };

        let response = match self.http.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("GET {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return None;
        }

        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("GET {} returned unparsable JSON: {}", url, e);
                None
            }
        }
    }

    /// POST `body` as JSON to `path` relative to the base URL. Same
    /// none-on-failure contract as [`get_json`](Self::get_json); on a 2xx
    /// the response body is decoded best-effort (an empty or malformed
    /// acknowledgment still counts as success).
    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Option<serde_json::Value> {
        let url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Invalid API path {}: {}", path, e);
                return None;
            }
        };

        let response = match self.http.post(url.clone()).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("POST {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("POST {} returned {}", url, status);
            return None;
        }

        Some(
            response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null),
        )
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.get_json("api/profile").await
    }

    pub async fn projects(&self, limit: usize) -> Option<Vec<Project>> {
        self.get_json(&format!("items/?skip=0&limit={limit}")).await
    }

    pub async fn skills(&self) -> Option<Vec<String>> {
        self.get_json("api/skills").await
    }

    pub async fn create_item(&self, item: &NewItem) -> Option<serde_json::Value> {
        self.post_json("create-item/", item).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Url::parse("http://127.0.0.1:8000/").unwrap())
    }

    #[test]
    fn resolve_joins_relative_paths_onto_base() {
        assert_eq!(
            client().resolve("static/profile.png"),
            "http://127.0.0.1:8000/static/profile.png"
        );
        assert_eq!(
            client().resolve("/static/profile.png"),
            "http://127.0.0.1:8000/static/profile.png"
        );
    }

    #[test]
    fn resolve_passes_absolute_urls_through() {
        assert_eq!(
            client().resolve("https://cdn.example.com/me.png"),
            "https://cdn.example.com/me.png"
        );
    }
}
