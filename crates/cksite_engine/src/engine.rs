use std::sync::{mpsc, Arc};
use std::thread;

use crate::relay::{FormRelay, FormspreeRelay, RelaySettings};
use crate::{EngineEvent, SubmissionFields, SubmissionId};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        fields: SubmissionFields,
    },
}

/// Background effect executor: commands in, events out.
///
/// Owns a dedicated thread hosting a tokio runtime so the caller's event
/// loop never blocks on relay IO.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: RelaySettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let relay = Arc::new(FormspreeRelay::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let relay = relay.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(relay.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, submission_id: SubmissionId, fields: SubmissionFields) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            fields,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    relay: &dyn FormRelay,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            fields,
        } => {
            let result = relay.submit(&fields).await;
            let _ = event_tx.send(EngineEvent::SubmissionCompleted {
                submission_id,
                result,
            });
        }
    }
}
