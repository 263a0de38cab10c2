#![allow(dead_code)]

pub mod catalog;
pub mod routes;
pub mod server;

use std::path::PathBuf;

use scimd_config::{Config, I18nConfig, ServerConfig};

/// Minimal configuration pointing at the given catalog file
pub fn test_config(catalog: PathBuf) -> Config {
    Config {
        server: ServerConfig::default(),
        i18n: I18nConfig { catalog },
    }
}
