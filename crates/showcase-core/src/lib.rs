use error::ShowcaseError;

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod github;
pub mod html;
pub mod http;
pub mod page;
pub mod time;

pub type ShowcaseResult<T> = std::result::Result<T, ShowcaseError>;
