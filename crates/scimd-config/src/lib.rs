#![allow(clippy::must_use_candidate)]

pub mod health;
pub mod i18n;
mod loader;
pub mod server;

use serde::Deserialize;

pub use health::*;
pub use i18n::*;
pub use server::*;

/// Top-level scimd configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Localization configuration
    pub i18n: I18nConfig,
}
