use std::sync::Arc;

use scimd_i18n::MessageCatalog;

use crate::classify::{Classified, classify};
use crate::response::ErrorResponse;
use crate::sink::FailureSink;

/// Terminal handler for failures escaping request processing
///
/// Classifies the failure, resolves the localized message for domain
/// errors, records the failure sink exactly once, and produces the
/// response entity. Every call yields exactly one response; nothing
/// propagates past this point.
#[derive(Clone)]
pub struct ErrorBoundary {
    catalog: Arc<MessageCatalog>,
    sink: Arc<dyn FailureSink>,
}

impl ErrorBoundary {
    pub fn new(catalog: Arc<MessageCatalog>, sink: Arc<dyn FailureSink>) -> Self {
        Self { catalog, sink }
    }

    /// The message catalog used for localization and locale negotiation
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Handle a failure, yielding the canonical error response
    pub fn handle(&self, failure: anyhow::Error, locale: &str) -> ErrorResponse {
        match classify(failure) {
            Classified::Domain(error) => {
                match self.catalog.resolve(error.message_code(), &error.message_args(), locale) {
                    Ok(message) => {
                        self.sink.record(&error.default_message());
                        ErrorResponse::from_api_error(error.as_ref(), message)
                    }
                    Err(fault) => {
                        // A broken catalog must not mask the request failure,
                        // and must stay distinguishable from it for operators.
                        tracing::error!(
                            code = error.message_code(),
                            error = %fault,
                            "message resolution failed"
                        );
                        let degraded = anyhow::anyhow!(
                            "message resolution failed for {}: {fault} (original failure: {})",
                            error.message_code(),
                            error.default_message(),
                        );
                        self.report_unclassified(degraded)
                    }
                }
            }
            Classified::Unclassified(error) => self.report_unclassified(error),
        }
    }

    fn report_unclassified(&self, error: anyhow::Error) -> ErrorResponse {
        self.sink.record(&error.to_string());
        ErrorResponse::from_unclassified(&error)
    }
}
