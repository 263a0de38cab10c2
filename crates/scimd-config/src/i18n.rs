use std::path::PathBuf;

use serde::Deserialize;

/// Localization configuration
///
/// The catalog file carries the locale tables and the default locale; see
/// `MessageCatalog::load` for the expected layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    /// Path to the TOML message catalog
    pub catalog: PathBuf,
}
