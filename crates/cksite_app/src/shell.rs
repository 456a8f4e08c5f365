use std::collections::VecDeque;

use cksite_core::{update, AppState, Effect, Field, FormPayload, Msg, SubmissionId, SubmitFailure};
use cksite_engine::SubmitError;

use crate::commands::ShellCommand;
use crate::events::ShellEvent;
use crate::render;

/// One relay submission requested by the core, handed to the platform
/// driver (thread engine natively, `spawn_local` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub submission_id: SubmissionId,
    pub payload: FormPayload,
}

/// Platform-independent application shell.
///
/// Owns the core state, translates host events into messages, renders the
/// view model into a host-command queue whenever the core marks itself
/// dirty, and collects submission effects for the platform driver.
pub struct Shell {
    state: AppState,
    commands: VecDeque<ShellCommand>,
    submissions: Vec<PendingSubmission>,
    frame: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            commands: VecDeque::new(),
            submissions: Vec::new(),
            frame: 0,
        }
    }

    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Booted { search, fragment } => {
                self.dispatch(Msg::LocationLoaded { search, fragment });
            }
            ShellEvent::FragmentChanged { path } => {
                self.dispatch(Msg::RouteChanged { path });
            }
            ShellEvent::FieldEdited { name, value } => {
                // Inputs the core does not know about stay host-only.
                if let Some(field) = Field::from_name(&name) {
                    self.dispatch(Msg::FieldEdited { field, value });
                }
            }
            ShellEvent::SubmitClicked => self.dispatch(Msg::SubmitClicked),
            ShellEvent::ScrollChanged { offset } => self.dispatch(Msg::ScrollMoved { offset }),
            ShellEvent::AnimationFrame => {
                self.frame += 1;
                site_logging::set_frame_tick(self.frame);
                self.dispatch(Msg::Frame);
            }
            ShellEvent::BackClicked { history_len } => {
                self.dispatch(Msg::BackClicked { history_len });
            }
            ShellEvent::TopClicked => self.dispatch(Msg::TopClicked),
            ShellEvent::SubmissionSettled {
                submission_id,
                result,
            } => {
                self.dispatch(Msg::SubmissionSettled {
                    submission_id,
                    result: result.map_err(|err| map_failure(&err)),
                });
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        for effect in effects {
            self.run_effect(effect);
        }
        if was_dirty {
            self.commands.extend(render::render(&view));
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SubmitForm {
                submission_id,
                payload,
            } => self.submissions.push(PendingSubmission {
                submission_id,
                payload,
            }),
            Effect::ScrollToTop => self.commands.push_back(ShellCommand::ScrollToTop),
            Effect::ResetScroll => self.commands.push_back(ShellCommand::ResetScroll),
            Effect::HistoryBack => self.commands.push_back(ShellCommand::HistoryBack),
            Effect::NavigateHome => self.commands.push_back(ShellCommand::NavigateHome),
            Effect::ReplaceRoute { route } => self.commands.push_back(ShellCommand::ReplaceRoute {
                path: route.path().to_owned(),
            }),
        }
    }

    /// Next host command, if any.
    pub fn try_dequeue_command(&mut self) -> Option<ShellCommand> {
        self.commands.pop_front()
    }

    /// Drain every queued host command.
    pub fn drain_commands(&mut self) -> Vec<ShellCommand> {
        self.commands.drain(..).collect()
    }

    /// Take the submissions requested since the last call.
    pub fn take_submissions(&mut self) -> Vec<PendingSubmission> {
        std::mem::take(&mut self.submissions)
    }
}

/// Engine failures expressed in the core's vocabulary.
fn map_failure(err: &SubmitError) -> SubmitFailure {
    match err {
        SubmitError::Network { .. } => SubmitFailure::Network,
        SubmitError::Rejected { message, .. } => SubmitFailure::Rejected {
            message: message.clone(),
        },
    }
}
