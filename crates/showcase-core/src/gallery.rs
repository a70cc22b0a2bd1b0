//! Build orchestration: one fetch, then one card per repository.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    card::render_card,
    constants::GITHUB_API_URL,
    error::ErrorContext,
    github::{self, Repo},
    page::GalleryPage,
    ShowcaseResult,
};

/// Renders `repos` into `page` in order, one fragment per repository.
pub fn render_into(page: &mut GalleryPage, repos: &[Repo], now: DateTime<Utc>) {
    for repo in repos {
        page.append_fragment(&render_card(repo, now));
    }
}

/// Fetches the topic search results and appends one card per repository.
///
/// The page is left untouched when the fetch or decode fails, so the
/// container renders exactly as it did before the build was attempted.
pub fn build_gallery(page: &mut GalleryPage, now: DateTime<Utc>) -> ShowcaseResult<Vec<Repo>> {
    build_gallery_from(page, GITHUB_API_URL, now)
}

/// Same as [`build_gallery`], against an explicit API base URL.
pub fn build_gallery_from(
    page: &mut GalleryPage,
    base_url: &str,
    now: DateTime<Utc>,
) -> ShowcaseResult<Vec<Repo>> {
    let repos = github::search_repositories_at(base_url)?;
    debug!("rendering {} repositories", repos.len());
    render_into(page, &repos, now);
    Ok(repos)
}

/// Writes the rendered page to disk.
pub fn write_gallery<P: AsRef<Path>>(path: P, html: &str) -> ShowcaseResult<()> {
    let path = path.as_ref();
    fs::write(path, html)
        .with_context(|| format!("writing gallery page to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::github::SearchResponse;

    const FIXTURE: &str = r#"{
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
            },
            {
                "name": "third",
                "html_url": "https://github.com/carol/third",
                "language": "C",
                "updated_at": "2023-05-04T12:00:00Z",
                "stargazers_count": 7,
                "description": "Third one",
                "owner": {
                    "login": "carol",
                    "html_url": "https://github.com/carol",
                    "avatar_url": "https://avatars.example.com/carol"
                }
            }
        ]
    }"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    fn fixture_repos() -> Vec<Repo> {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        response.items
    }

    #[test]
    fn test_render_appends_one_fragment_per_item_in_order() {
        let mut page = GalleryPage::default_page();
        let repos = fixture_repos();
        render_into(&mut page, &repos, now());

        assert_eq!(page.fragment_count(), repos.len());

        let html = page.to_html();
        let first = html.find(">first</a>").unwrap();
        let second = html.find(">second</a>").unwrap();
        let third = html.find(">third</a>").unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_rendering_twice_appends_a_second_set() {
        let mut page = GalleryPage::default_page();
        let repos = fixture_repos();

        render_into(&mut page, &repos, now());
        let first_set = page.container().to_string();
        render_into(&mut page, &repos, now());

        assert_eq!(page.fragment_count(), 2 * repos.len());
        // The first set is intact, not replaced.
        assert!(page.container().starts_with(&first_set));
    }

    #[test]
    fn test_failed_fetch_leaves_page_unchanged() {
        let mut page = GalleryPage::default_page();
        let before = page.to_html();

        // Unsupported scheme, so the request fails before any I/O.
        let result = build_gallery_from(&mut page, "ftp://localhost", now());

        assert!(result.is_err());
        assert_eq!(page.to_html(), before);
        assert_eq!(page.fragment_count(), 0);
    }

    #[test]
    fn test_write_gallery_reports_io_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("gallery.html");

        let err = write_gallery(&path, "<html></html>").unwrap_err();
        assert!(format!("{}", err).contains("writing gallery page"));
    }

    #[test]
    fn test_write_gallery_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.html");

        let mut page = GalleryPage::default_page();
        render_into(&mut page, &fixture_repos(), now());
        write_gallery(&path, &page.to_html()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, page.to_html());
    }
}
