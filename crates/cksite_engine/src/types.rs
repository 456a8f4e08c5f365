/// Identifier for one submission attempt, assigned by the caller.
pub type SubmissionId = u64;

/// Ordered multipart fields for one relay submission.
pub type SubmissionFields = Vec<(String, String)>;

/// Events flowing back from the engine to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmissionCompleted {
        submission_id: SubmissionId,
        result: Result<(), SubmitError>,
    },
}

/// Why a submission failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// No response was obtained from the relay at all.
    #[error("network error: {message}")]
    Network { message: String },
    /// The relay responded with a failure status. `message` carries the
    /// relay's structured error message when the body had one.
    #[error("relay rejected submission (http status {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}
