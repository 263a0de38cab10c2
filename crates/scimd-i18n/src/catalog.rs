use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::locale::parse_accept_language;

/// Message catalog lookup failure
///
/// A missing catalog entry is a deployment problem, not a request problem;
/// callers must surface it instead of substituting an empty message.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Code is absent from both the requested and the default locale
    #[error("no catalog entry for {code} in locale {locale} or default locale")]
    UnknownCode { code: String, locale: String },
}

/// Localized message catalog
///
/// Immutable after load; share across request handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    default_locale: String,
    locales: HashMap<String, HashMap<String, String>>,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    default_locale: String,
    locales: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if the
    /// default locale has no message table, or if any template is empty
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read message catalog {}: {e}", path.display()))?;

        let file: CatalogFile =
            toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse message catalog: {e}"))?;

        Self::from_parts(file.default_locale, file.locales)
    }

    /// Build a catalog from in-memory locale tables
    ///
    /// # Errors
    ///
    /// Returns an error if the default locale has no message table or if
    /// any template is empty
    pub fn from_parts(
        default_locale: String,
        locales: HashMap<String, HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        if !locales.contains_key(&default_locale) {
            anyhow::bail!("default locale {default_locale} has no message table");
        }

        for (locale, messages) in &locales {
            for (code, template) in messages {
                if template.trim().is_empty() {
                    anyhow::bail!("empty template for {code} in locale {locale}");
                }
            }
        }

        Ok(Self {
            default_locale,
            locales,
        })
    }

    /// The locale used when negotiation finds no match
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Resolve a message code to a localized string
    ///
    /// Falls back to the default locale when the requested locale has no
    /// entry for the code.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownCode`] when neither locale carries
    /// the code
    pub fn resolve(&self, code: &str, args: &[String], locale: &str) -> Result<String, ResolveError> {
        let template = self
            .lookup(locale, code)
            .or_else(|| self.lookup(&self.default_locale, code))
            .ok_or_else(|| ResolveError::UnknownCode {
                code: code.to_owned(),
                locale: locale.to_owned(),
            })?;

        Ok(expand(template, args))
    }

    /// Pick the best available locale for an Accept-Language header
    ///
    /// Returns the default locale when the header is absent or none of the
    /// preferred locales has a message table.
    pub fn negotiate(&self, accept_language: Option<&str>) -> &str {
        if let Some(header) = accept_language {
            for locale in parse_accept_language(header) {
                if let Some((known, _)) = self.locales.get_key_value(&locale) {
                    return known;
                }
            }
        }
        &self.default_locale
    }

    fn lookup(&self, locale: &str, code: &str) -> Option<&str> {
        self.locales.get(locale)?.get(code).map(String::as_str)
    }
}

/// Substitute positional `{0}`-style placeholders with argument values
///
/// Placeholders without a matching argument are left verbatim.
fn expand(template: &str, args: &[String]) -> String {
    let mut message = template.to_owned();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}
