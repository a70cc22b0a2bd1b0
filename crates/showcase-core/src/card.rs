//! Card rendering: one markup fragment per repository.
//!
//! A card has five regions: linked avatar (top left), name/language/update
//! lines (top center), star count (top right) and the description (bottom).
//! Missing optional fields never abort the rest of the card.

use chrono::{DateTime, Utc};

use crate::{github::Repo, html::HtmlBuilder, time::relative_time};

/// Language caption fallback when the API reports no primary language.
const UNKNOWN_LANGUAGE: &str = "unknown";

pub fn render_card(repo: &Repo, now: DateTime<Utc>) -> String {
    let language = repo.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE);
    let description = repo.description.as_deref().unwrap_or_default();
    // An unparseable timestamp degrades to the raw value instead of
    // dropping the card.
    let updated =
        relative_time(&repo.updated_at, now).unwrap_or_else(|_| repo.updated_at.clone());

    let mut html = HtmlBuilder::new();
    html.raw("<div class=\"card repo\">\n");

    html.raw("  <div class=\"card-top-left\">\n    <a");
    html.attr("href", &repo.owner.html_url);
    html.raw("><img class=\"repo-owner-avatar\"");
    html.attr("src", &repo.owner.avatar_url);
    html.attr("alt", &repo.owner.login);
    html.raw(" /></a>\n  </div>\n");

    html.raw("  <div class=\"card-top-center\">\n    <p class=\"repo-name\"><a");
    html.attr("href", &repo.html_url);
    html.raw(">");
    html.text(&repo.name);
    html.raw("</a></p>\n    <p class=\"repo-language\">Include ");
    html.text(language);
    html.raw(" code</p>\n    <p class=\"repo-last-update\">Updated ");
    html.text(&updated);
    html.raw("</p>\n  </div>\n");

    html.raw("  <div class=\"card-top-right\">\n    <p class=\"repo-stars\"><span>☆</span>");
    html.text(&repo.stargazers_count.to_string());
    html.raw("</p>\n  </div>\n");

    html.raw("  <div class=\"card-bottom\">\n    <p class=\"repo-desc\">");
    html.text(description);
    html.raw("</p>\n  </div>\n</div>\n");

    html.finish()
}
