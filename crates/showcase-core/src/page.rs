//! Gallery page handling.
//!
//! A gallery page is an HTML document with one designated container element
//! (`id="repos"`) that card fragments are appended into. The document is
//! split once around that container; appends accumulate after any content
//! the container already holds and never clear it.

use crate::{constants::CONTAINER_ID, error::ShowcaseError, ShowcaseResult};

/// Built-in page template used when no template file is given.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Showcase</title>
<style>
body {
  margin: 0 auto;
  max-width: 720px;
  padding: 1rem;
  font-family: sans-serif;
  color: #24292f;
}
.card {
  display: grid;
  grid-template-columns: 56px 1fr auto;
  gap: 0 12px;
  margin: 1rem 0;
  padding: 1rem;
  border: 1px solid #d0d7de;
  border-radius: 6px;
}
.card p { margin: 0.2rem 0; }
.card-bottom { grid-column: 1 / -1; }
.repo-owner-avatar { width: 48px; height: 48px; border-radius: 50%; }
.repo-name { font-weight: 600; }
.repo-name a { color: #0969da; text-decoration: none; }
.repo-language, .repo-last-update { color: #57606a; font-size: 0.85rem; }
.repo-stars { color: #57606a; }
.repo-desc { color: #57606a; font-size: 0.9rem; }
</style>
</head>
<body>
<h1>Showcase</h1>
<div id="repos"></div>
</body>
</html>
"#;

/// An HTML document split around the gallery container.
#[derive(Debug, Clone)]
pub struct GalleryPage {
    prefix: String,
    container: String,
    suffix: String,
}

impl GalleryPage {
    /// Builds a page from the built-in template.
    pub fn default_page() -> Self {
        Self::from_template(DEFAULT_TEMPLATE).expect("built-in template carries the container")
    }

    /// Builds a page from template markup, locating the container element by
    /// its fixed identifier.
    ///
    /// The first element with `id="repos"` is used; its existing content is
    /// preserved and fragments are appended after it. A template without the
    /// container is rejected.
    pub fn from_template(html: &str) -> ShowcaseResult<Self> {
        let marker = format!("id=\"{CONTAINER_ID}\"");
        let not_found = || {
            ShowcaseError::ContainerNotFound {
                id: CONTAINER_ID.to_string(),
            }
        };

        let attr_pos = html.find(&marker).ok_or_else(not_found)?;
        let open_start = html[..attr_pos].rfind('<').ok_or_else(not_found)?;
        let tag_name: String = html[open_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag_name.is_empty() {
            return Err(not_found());
        }

        let open_end = html[attr_pos..]
            .find('>')
            .map(|i| attr_pos + i + 1)
            .ok_or_else(not_found)?;

        let close_start =
            find_closing_tag(&html[open_end..], &tag_name).ok_or_else(not_found)? + open_end;

        Ok(Self {
            prefix: html[..open_end].to_string(),
            container: html[open_end..close_start].to_string(),
            suffix: html[close_start..].to_string(),
        })
    }

    /// Appends a fragment after the container's existing content.
    pub fn append_fragment(&mut self, fragment: &str) {
        self.container.push_str(fragment);
    }

    /// Number of card fragments currently in the container.
    pub fn fragment_count(&self) -> usize {
        self.container.matches("<div class=\"card repo\">").count()
    }

    /// Current content of the container element.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Reassembles the full document.
    pub fn to_html(&self) -> String {
        let mut html =
            String::with_capacity(self.prefix.len() + self.container.len() + self.suffix.len());
        html.push_str(&self.prefix);
        html.push_str(&self.container);
        html.push_str(&self.suffix);
        html
    }
}

/// Finds the start of the close tag matching an already-open `tag`, walking
/// nested elements of the same name. `rest` starts right after the opening
/// tag; the returned offset is relative to it.
fn find_closing_tag(rest: &str, tag: &str) -> Option<usize> {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut depth = 1usize;
    let mut pos = 0usize;

    while pos < rest.len() {
        let at = pos + rest[pos..].find('<')?;
        let after = &rest[at..];

        if after.starts_with(&close) && at_tag_boundary(after[close.len()..].chars().next()) {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
            pos = at + close.len();
        } else if after.starts_with(&open) && at_tag_boundary(after[open.len()..].chars().next()) {
            depth += 1;
            pos = at + open.len();
        } else {
            pos = at + 1;
        }
    }

    None
}

fn at_tag_boundary(c: Option<char>) -> bool {
    matches!(c, Some('>' | '/' | ' ' | '\t' | '\n' | '\r') | None)
}
