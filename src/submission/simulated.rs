//! Stand-in submitter used when no endpoint is configured

use super::{InquirySubmitter, SubmitError};
use crate::state::Inquiry;
use async_trait::async_trait;
use std::time::Duration;

/// Waits a fixed delay, logs the inquiry, and always succeeds
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InquirySubmitter for SimulatedSubmitter {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            id = %inquiry.id,
            form = ?inquiry.form,
            inquiry_type = ?inquiry.inquiry_type,
            email = %inquiry.email,
            "Simulated inquiry submission"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("simulated ({} ms)", self.delay.as_millis())
    }
}
