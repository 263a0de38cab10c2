use scimd_core::{ApiError, ResourceError};

/// Outcome of inspecting a failure at the reporting boundary
#[derive(Debug)]
pub enum Classified {
    /// A recognized domain error carrying status and message metadata
    Domain(Box<dyn ApiError>),
    /// Anything else; reported uniformly as an internal error
    Unclassified(anyhow::Error),
}

/// Tag a failure as domain or unclassified
///
/// A pure downcast over the closed domain error set; new failure kinds are
/// added as `ResourceError` variants, not as extra arms here.
pub fn classify(failure: anyhow::Error) -> Classified {
    match failure.downcast::<ResourceError>() {
        Ok(domain) => Classified::Domain(Box::new(domain)),
        Err(other) => Classified::Unclassified(other),
    }
}
