use std::{fs, path::PathBuf};

use chrono::Utc;
use nu_ansi_term::Color::{Blue, Cyan, Green, LightRed, Magenta};
use showcase_core::{
    config::get_config,
    constants::{DEFAULT_OUTPUT, TOPIC_PRIMARY, TOPIC_SECONDARY},
    error::ErrorContext,
    gallery::{build_gallery, write_gallery},
    page::GalleryPage,
    time::relative_time,
    ShowcaseResult,
};
use tabled::{
    builder::Builder,
    settings::{peaker::PriorityMax, themes::BorderCorrection, Panel, Style, Width},
};
use tracing::{debug, info};

use crate::utils::{term_width, Colored};

pub async fn build_gallery_page(
    output: Option<String>,
    template: Option<String>,
) -> ShowcaseResult<()> {
    let config = get_config();
    let now = Utc::now();

    let mut page = match template.or_else(|| config.template.clone()) {
        Some(path) => {
            let html = fs::read_to_string(&path)
                .with_context(|| format!("reading page template {path}"))?;
            GalleryPage::from_template(&html)?
        }
        None => GalleryPage::default_page(),
    };

    debug!(
        "searching repositories tagged {} and {}",
        TOPIC_PRIMARY, TOPIC_SECONDARY
    );

    let repos = build_gallery(&mut page, now)?;

    for repo in &repos {
        let updated =
            relative_time(&repo.updated_at, now).unwrap_or_else(|_| repo.updated_at.clone());
        info!(
            name = repo.name,
            owner = repo.owner.login,
            language = repo.language.as_deref(),
            stars = repo.stargazers_count,
            updated = updated,
            "{}/{} | {} | ☆{} | updated {}",
            Colored(Cyan, &repo.owner.login),
            Colored(Blue, &repo.name),
            Colored(
                Magenta,
                repo.language.as_deref().unwrap_or("unknown")
            ),
            Colored(LightRed, repo.stargazers_count),
            updated,
        );
    }

    let output = output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let output = PathBuf::from(output);

    write_gallery(&output, &page.to_html())?;

    let mut builder = Builder::new();
    builder.push_record([
        "Repositories".to_string(),
        Colored(Cyan, repos.len()).to_string(),
    ]);
    builder.push_record([
        "Topics".to_string(),
        format!("{TOPIC_PRIMARY} + {TOPIC_SECONDARY}"),
    ]);
    builder.push_record([
        "Output".to_string(),
        Colored(Green, output.display()).to_string(),
    ]);

    let table = builder
        .build()
        .with(Panel::header("Gallery"))
        .with(Style::rounded())
        .with(BorderCorrection {})
        .with(Width::wrap(term_width()).priority(PriorityMax::default()))
        .to_string();

    info!("\n{table}");

    Ok(())
}
