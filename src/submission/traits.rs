//! Trait abstraction for inquiry delivery to enable mocking in tests

use super::SubmitError;
use crate::state::Inquiry;
use async_trait::async_trait;

/// Delivers a validated inquiry to the sales backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquirySubmitter: Send + Sync {
    /// Resolve once the backend has accepted or refused the inquiry
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError>;

    /// Short description for logs and the status bar
    fn describe(&self) -> String;
}
