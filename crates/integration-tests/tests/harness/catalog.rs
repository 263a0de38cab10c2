//! Message catalog fixtures written to a temp directory

use std::path::PathBuf;

use tempfile::TempDir;

/// Catalog covering every code the test routes can raise, with a partial
/// French translation
pub fn full_catalog(dir: &TempDir) -> PathBuf {
    write(
        dir,
        r#"
default_locale = "en"

[locales.en]
"user.not_found" = "user {0} does not exist"
"user.conflict" = "user {0} already exists"
"auth.required" = "authentication required"

[locales.fr]
"user.not_found" = "l'utilisateur {0} n'existe pas"
"#,
    )
}

/// Catalog with `auth.required` missing from every locale, simulating a
/// catalog outage for a known-good code
pub fn catalog_without_auth(dir: &TempDir) -> PathBuf {
    write(
        dir,
        r#"
default_locale = "en"

[locales.en]
"user.not_found" = "user {0} does not exist"
"user.conflict" = "user {0} already exists"
"#,
    )
}

fn write(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("messages.toml");
    std::fs::write(&path, contents).expect("failed to write catalog fixture");
    path
}
