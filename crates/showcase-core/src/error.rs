//! Error types for showcase-core.

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for gallery operations.
#[derive(Error, Diagnostic, Debug)]
pub enum ShowcaseError {
    #[error("Error while {action}")]
    #[diagnostic(code(showcase::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(
        code(showcase::network),
        help("Check your internet connection and try again")
    )]
    Network(#[from] Box<ureq::Error>),

    #[error("HTTP {status}: {url}")]
    #[diagnostic(code(showcase::http_status))]
    HttpError { status: u16, url: String },

    #[error("Invalid response from server")]
    #[diagnostic(
        code(showcase::invalid_response),
        help("The search endpoint returned a body that is not valid JSON")
    )]
    InvalidResponse,

    #[error("Invalid timestamp: {0}")]
    #[diagnostic(code(showcase::timestamp))]
    InvalidTimestamp(String),

    #[error("No element with id \"{id}\" in the page template")]
    #[diagnostic(
        code(showcase::container_not_found),
        help("Add an element with the designated id to the template")
    )]
    ContainerNotFound { id: String },

    #[error(transparent)]
    #[diagnostic(code(showcase::toml), help("Check your configuration structure"))]
    TomlError(#[from] toml::ser::Error),

    #[error(transparent)]
    #[diagnostic(code(showcase::config), help("Check your config.toml syntax"))]
    ConfigError(#[from] toml::de::Error),

    #[error("Thread lock poison error")]
    #[diagnostic(
        code(showcase::poison),
        help("This is an internal error, please report it")
    )]
    PoisonError,

    #[error("{0}")]
    #[diagnostic(code(showcase::error))]
    Custom(String),
}

impl From<ureq::Error> for ShowcaseError {
    fn from(e: ureq::Error) -> Self {
        Self::Network(Box::new(e))
    }
}

impl<T> From<std::sync::PoisonError<T>> for ShowcaseError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::PoisonError
    }
}

/// Trait for adding context to IO errors.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, ShowcaseError>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, ShowcaseError>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| {
            ShowcaseError::IoError {
                action: context(),
                source: err,
            }
        })
    }
}
