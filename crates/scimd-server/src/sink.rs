/// Observability hook invoked for every handled failure
///
/// Implementations must be safe for concurrent use from arbitrary numbers
/// of simultaneous requests.
pub trait FailureSink: Send + Sync {
    /// Record the internal message of a handled failure
    fn record(&self, message: &str);
}

/// Default sink writing to the tracing error stream
#[derive(Debug, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::error!("{message}");
    }
}
