use std::{env, fs, path::PathBuf, process::Command, time::Duration};

use build::build_gallery_page;
use clap::Parser;
use cli::Args;
use logging::setup_logging;
use showcase_core::{
    config::{self, generate_default_config, get_config, Config, CONFIG_PATH},
    error::{ErrorContext, ShowcaseError},
    http::configure_http_client,
    ShowcaseResult,
};
use tracing::{info, warn};
use ureq::Proxy;

mod build;
mod cli;
mod logging;
mod utils;

async fn handle_cli() -> ShowcaseResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        let mut color = utils::COLOR.write().unwrap();
        *color = false;
    }

    if let Some(ref c) = args.config {
        let mut config_path = CONFIG_PATH.write()?;
        let path = PathBuf::from(c);
        *config_path = if path.is_absolute() {
            path
        } else {
            env::current_dir()
                .with_context(|| "retrieving current directory".into())?
                .join(path)
        };
    }

    match args.command {
        cli::Commands::DefConfig => generate_default_config()?,
        command => {
            config::init()?;
            let config = get_config();

            let proxy = match args.proxy.clone().or_else(|| config.proxy.clone()) {
                Some(p) => Some(Proxy::new(&p)?),
                None => None,
            };
            let user_agent = args.user_agent.clone().or_else(|| config.user_agent.clone());
            let timeout = config.timeout;

            configure_http_client(|client| {
                if let Some(proxy) = proxy {
                    client.proxy = Some(proxy);
                }

                if let Some(user_agent) = user_agent {
                    client.user_agent = Some(user_agent);
                }

                if let Some(secs) = timeout {
                    client.timeout = Some(Duration::from_secs(secs));
                }
            });

            match command {
                cli::Commands::Build {
                    output,
                    template,
                } => {
                    build_gallery_page(output, template).await?;
                }
                cli::Commands::Config {
                    edit,
                } => {
                    let config_path = CONFIG_PATH.read()?;
                    match edit {
                        Some(editor) => {
                            let editor = editor
                                .or_else(|| env::var("EDITOR").ok())
                                .unwrap_or_else(|| "vi".to_string());
                            Command::new(&editor)
                                .arg(&*config_path)
                                .status()
                                .with_context(|| {
                                    format!(
                                        "executing command {} {}",
                                        editor,
                                        config_path.display()
                                    )
                                })?;
                        }
                        None => {
                            let content = match fs::read_to_string(&*config_path) {
                                Ok(v) => v,
                                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                                    warn!("Config file {} not found", config_path.display());
                                    toml::to_string_pretty(&Config::default())?
                                }
                                Err(err) => {
                                    return Err(ShowcaseError::IoError {
                                        action: "reading config".to_string(),
                                        source: err,
                                    });
                                }
                            };
                            info!("{}", content);
                        }
                    };
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Install miette's fancy error handler for beautiful error output
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli().await {
        // Use miette's error display for Diagnostic errors
        eprintln!("{:?}", miette::Report::new(err));
    }
}
