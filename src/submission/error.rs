//! Submission failures

/// Why an inquiry could not be delivered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Could not reach the inquiry endpoint: {0}")]
    Transport(String),
    #[error("Inquiry endpoint responded with status {status}")]
    Rejected { status: u16 },
}
