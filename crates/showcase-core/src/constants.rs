/// Upstream GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Topics every listed repository must carry. Fixed product constants,
/// not exposed through the configuration file.
pub const TOPIC_PRIMARY: &str = "rust";
pub const TOPIC_SECONDARY: &str = "cli";

/// Identifier of the gallery container element in the page template.
pub const CONTAINER_ID: &str = "repos";

/// User agent sent with the search request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "showcase";

/// Default path the rendered page is written to.
pub const DEFAULT_OUTPUT: &str = "showcase.html";
