//! Typed client for the GitHub repository search endpoint.
//!
//! One GET request per build, no authentication, no pagination. The response
//! body is decoded straight into [`SearchResponse`] so malformed payloads are
//! rejected at the network boundary instead of surfacing mid-render.

use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{GITHUB_API_URL, TOPIC_PRIMARY, TOPIC_SECONDARY},
    error::ShowcaseError,
    http::SHARED_AGENT,
    ShowcaseResult,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub html_url: String,
    pub avatar_url: String,
    pub login: String,
}

/// One repository summary from the search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub owner: Owner,
    pub html_url: String,
    pub name: String,
    pub language: Option<String>,
    pub updated_at: String,
    pub stargazers_count: u64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Repo>,
}

/// Fetches the repositories carrying both fixed topics, in response order.
pub fn search_topic_repositories() -> ShowcaseResult<Vec<Repo>> {
    search_repositories_at(GITHUB_API_URL)
}

/// Same as [`search_topic_repositories`], against an explicit API base URL.
pub fn search_repositories_at(base_url: &str) -> ShowcaseResult<Vec<Repo>> {
    let url = format!(
        "{}/search/repositories?q=topic:{}+topic:{}",
        base_url,
        encode(TOPIC_PRIMARY),
        encode(TOPIC_SECONDARY)
    );

    debug!("fetching repositories from {}", url);

    let mut resp = SHARED_AGENT.get(&url).call()?;
    let status = resp.status();

    if !status.is_success() {
        return Err(ShowcaseError::HttpError {
            status: status.as_u16(),
            url,
        });
    }

    let response: SearchResponse = resp
        .body_mut()
        .read_json()
        .map_err(|_| ShowcaseError::InvalidResponse)?;

    Ok(response.items)
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "name": "first",
                "html_url": "https://github.com/alice/first",
                "language": "Rust",
                "updated_at": "2024-05-01T12:00:00Z",
                "stargazers_count": 42,
                "description": "A first repository",
                "owner": {
                    "login": "alice",
                    "html_url": "https://github.com/alice",
                    "avatar_url": "https://avatars.example.com/alice"
                }
            },
            {
                "name": "second",
                "html_url": "https://github.com/bob/second",
                "language": null,
                "updated_at": "2024-04-01T12:00:00Z",
                "stargazers_count": 0,
                "description": null,
                "owner": {
                    "login": "bob",
                    "html_url": "https://github.com/bob",
                    "avatar_url": "https://avatars.example.com/bob"
                }
            }
        ]
    }"#;

    #[test]
    fn test_decode_search_response() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(response.items.len(), 2);

        let first = &response.items[0];
        assert_eq!(first.name, "first");
        assert_eq!(first.owner.login, "alice");
        assert_eq!(first.language.as_deref(), Some("Rust"));
        assert_eq!(first.stargazers_count, 42);
    }

    #[test]
    fn test_decode_preserves_response_order() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let names: Vec<&str> = response.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_decode_nullable_fields() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let second = &response.items[1];
        assert!(second.language.is_none());
        assert!(second.description.is_none());
        assert_eq!(second.stargazers_count, 0);
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let result: Result<SearchResponse, _> = serde_json::from_str("{\"items\": 3}");
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_topic_fragment() {
        assert_eq!(encode("rust"), "rust");
        assert_eq!(encode("two words"), "two+words");
    }

    #[test]
    fn test_fetch_fails_without_reaching_network() {
        // Scheme is not http(s), so the request errors before any I/O.
        let result = search_repositories_at("ftp://localhost");
        assert!(result.is_err());
    }
}
