//! Configuration loading for the gallery builder.
//!
//! The config file only carries presentation and network knobs; the search
//! topics are fixed constants and have no configuration surface.

use std::{
    fs,
    path::PathBuf,
    sync::{LazyLock, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{DEFAULT_OUTPUT, DEFAULT_USER_AGENT},
    error::{ErrorContext, ShowcaseError},
    ShowcaseResult,
};

/// Application's configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// User agent sent with the search request.
    /// Default: showcase
    pub user_agent: Option<String>,

    /// Proxy URL used for the search request.
    pub proxy: Option<String>,

    /// Request timeout in seconds. Unset means no timeout.
    pub timeout: Option<u64>,

    /// Path the rendered gallery page is written to.
    /// Default: showcase.html
    pub output: Option<String>,

    /// Path to a custom page template. The built-in template is used
    /// when unset.
    pub template: Option<String>,
}

pub static CONFIG: LazyLock<RwLock<Option<Config>>> = LazyLock::new(|| RwLock::new(None));

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("SHOWCASE_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("showcase").join("config.toml"),
    })
});

fn xdg_config_home() -> PathBuf {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(path_str) if !path_str.is_empty() => PathBuf::from(path_str),
        _ => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        }
    }
}

pub fn init() -> ShowcaseResult<()> {
    let config = Config::new()?;
    let mut global_config = CONFIG.write()?;
    *global_config = Some(config);
    Ok(())
}

pub fn get_config() -> Config {
    let config_guard = CONFIG.read().unwrap();
    config_guard.clone().unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            proxy: None,
            timeout: Some(30),
            output: Some(DEFAULT_OUTPUT.to_string()),
            template: None,
        }
    }
}

impl Config {
    /// Loads the configuration from [`CONFIG_PATH`], falling back to the
    /// defaults when the file does not exist.
    pub fn new() -> ShowcaseResult<Self> {
        let config_path = CONFIG_PATH.read()?.to_path_buf();

        let config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", config_path.display());
                Self::default()
            }
            Err(err) => {
                return Err(ShowcaseError::IoError {
                    action: format!("reading config from {}", config_path.display()),
                    source: err,
                })
            }
        };

        Ok(config)
    }
}

/// Writes the default configuration to [`CONFIG_PATH`]. Refuses to clobber
/// an existing file.
pub fn generate_default_config() -> ShowcaseResult<()> {
    let config_path = CONFIG_PATH.read()?.to_path_buf();

    if config_path.exists() {
        return Err(ShowcaseError::Custom(
            "Configuration file already exists".to_string(),
        ));
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;
    }

    let serialized = toml::to_string_pretty(&Config::default())?;
    fs::write(&config_path, &serialized)
        .with_context(|| format!("writing config to {}", config_path.display()))?;

    Ok(())
}
