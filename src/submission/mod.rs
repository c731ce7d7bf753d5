//! Inquiry submission
//!
//! The form state machine hands accepted inquiries to an [`InquirySubmitter`].
//! A configured endpoint gets the HTTP client; otherwise submissions are simulated.

mod client;
mod error;
mod simulated;
mod traits;

pub use client::HttpInquiryClient;
pub use error::SubmitError;
pub use simulated::SimulatedSubmitter;
#[cfg(test)]
pub use traits::MockInquirySubmitter;
pub use traits::InquirySubmitter;

use crate::config::SiteConfig;
use crate::state::FormVariant;
use std::sync::Arc;

/// Result of one spawned submission, sent back to the event loop
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub form: FormVariant,
    pub result: Result<(), SubmitError>,
}

/// Pick the submitter for the given configuration
pub fn from_config(config: &SiteConfig) -> Arc<dyn InquirySubmitter> {
    let submitter: Arc<dyn InquirySubmitter> = match config.endpoint() {
        Some(endpoint) => Arc::new(HttpInquiryClient::new(endpoint)),
        None => Arc::new(SimulatedSubmitter::new(config.simulated_delay())),
    };
    tracing::info!(submitter = %submitter.describe(), "Inquiry submitter ready");
    submitter
}
