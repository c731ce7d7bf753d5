//! HTTP client posting inquiries to the configured endpoint

use super::{InquirySubmitter, SubmitError};
use crate::state::Inquiry;
use async_trait::async_trait;

/// POSTs each inquiry as JSON; any transport error or non-2xx status fails it
pub struct HttpInquiryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInquiryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl InquirySubmitter for HttpInquiryClient {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(inquiry)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(id = %inquiry.id, endpoint = %self.endpoint, "Inquiry delivered");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("POST {}", self.endpoint)
    }
}
