use cksite_engine::{EngineEvent, EngineHandle, RelaySettings, SubmissionFields};
use site_logging::{site_info, site_warn};

use crate::events::ShellEvent;
use crate::shell::PendingSubmission;

/// Native platform driver for submission effects: hands payloads to the
/// background engine and converts engine events back into shell events.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: RelaySettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, submissions: Vec<PendingSubmission>) {
        for submission in submissions {
            site_info!(
                "submit id={} fields={}",
                submission.submission_id,
                submission.payload.fields().len()
            );
            self.engine
                .submit(submission.submission_id, to_fields(submission.payload));
        }
    }

    /// Non-blocking poll for a settled submission.
    pub fn poll(&self) -> Option<ShellEvent> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::SubmissionCompleted {
                submission_id,
                result,
            } => {
                if let Err(err) = &result {
                    site_warn!("submission {submission_id} failed: {err}");
                }
                ShellEvent::SubmissionSettled {
                    submission_id,
                    result,
                }
            }
        })
    }
}

fn to_fields(payload: cksite_core::FormPayload) -> SubmissionFields {
    payload
        .into_fields()
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}
