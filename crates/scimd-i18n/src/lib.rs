#![allow(clippy::must_use_candidate)]

mod catalog;
mod locale;

pub use catalog::{MessageCatalog, ResolveError};
pub use locale::parse_accept_language;
