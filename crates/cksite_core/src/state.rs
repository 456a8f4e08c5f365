use crate::form::{ContactForm, FormPayload, SubmissionId, SubmissionStatus, SubmitFailure};
use crate::route::Route;
use crate::scroll::{FrameCoalescer, MountedGate, VisibilityGate, DEFAULT_TOP_THRESHOLD};
use crate::text;
use crate::view_model::{AppViewModel, BackControlView, StatusLine, StatusTone};

/// Back affordance reveal threshold: zero, visible at rest.
const BACK_THRESHOLD: f64 = 0.0;

/// Whole-app state. Owned by the shell, mutated only through
/// [`update`](crate::update).
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    route: Route,
    prefill: String,
    form: ContactForm,
    status: SubmissionStatus,
    submission_seq: SubmissionId,
    back_gate: MountedGate,
    top_gate: VisibilityGate,
    scroll: FrameCoalescer,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            prefill: String::new(),
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            submission_seq: 0,
            back_gate: MountedGate::new(BACK_THRESHOLD, 0.0),
            top_gate: VisibilityGate::new(DEFAULT_TOP_THRESHOLD, 0.0),
            scroll: FrameCoalescer::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        AppViewModel {
            route: self.route,
            prefill: self.prefill.clone(),
            message_draft: self.form.message.clone(),
            status: self.status.clone(),
            submit_enabled: !loading,
            submit_label: if loading {
                text::LABEL_SUBMIT_LOADING
            } else {
                text::LABEL_SUBMIT_IDLE
            },
            status_line: match &self.status {
                SubmissionStatus::Success => Some(StatusLine {
                    tone: StatusTone::Positive,
                    text: text::MSG_SUBMIT_SUCCESS.to_owned(),
                }),
                SubmissionStatus::Error(message) => Some(StatusLine {
                    tone: StatusTone::Negative,
                    text: message.clone(),
                }),
                SubmissionStatus::Idle | SubmissionStatus::Loading => None,
            },
            back_control: BackControlView {
                mounted: self.back_gate.mounted(),
                visible: self.back_gate.visible(),
            },
            top_visible: self.top_gate.visible(),
            dirty: self.dirty,
        }
    }

    /// Take the dirty flag; the shell re-renders when it was set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.status, SubmissionStatus::Loading)
    }

    /// Store the once-per-load pre-fill text and seed the message draft.
    pub(crate) fn set_prefill(&mut self, message: String) {
        self.prefill = message.clone();
        self.form.message = message;
        self.mark_dirty();
    }

    pub(crate) fn enter_route(&mut self, route: Route) {
        // Entering the contact view is a fresh mount: draft reset to the
        // pre-fill default, submission state back to idle.
        if route == Route::Contact && self.route != Route::Contact {
            self.form = ContactForm::with_message(self.prefill.clone());
            self.status = SubmissionStatus::Idle;
        }
        self.route = route;
        self.mark_dirty();
    }

    pub(crate) fn edit_field(&mut self, field: crate::form::Field, value: String) {
        // The host owns the input contents; no re-render on keystrokes.
        self.form.set(field, value);
    }

    pub(crate) fn begin_submission(&mut self) -> (SubmissionId, FormPayload) {
        self.submission_seq += 1;
        self.status = SubmissionStatus::Loading;
        self.mark_dirty();
        (self.submission_seq, FormPayload::from_form(&self.form))
    }

    pub(crate) fn settle_submission(
        &mut self,
        submission_id: SubmissionId,
        result: Result<(), SubmitFailure>,
    ) {
        if submission_id != self.submission_seq || !self.is_loading() {
            // Stale settlement: superseded, navigated, or already settled.
            return;
        }
        self.status = match result {
            Ok(()) => {
                self.form.clear();
                SubmissionStatus::Success
            }
            Err(SubmitFailure::Rejected { message }) => SubmissionStatus::Error(
                message.unwrap_or_else(|| text::MSG_SUBMIT_ERROR.to_owned()),
            ),
            Err(SubmitFailure::Network) => {
                SubmissionStatus::Error(text::MSG_NETWORK_ERROR.to_owned())
            }
        };
        self.mark_dirty();
    }

    pub(crate) fn record_scroll(&mut self, offset: f64) {
        self.scroll.record(offset);
    }

    /// One animation frame: recompute the gates from the latest offset
    /// and advance the deferred-unmount countdown.
    pub(crate) fn run_frame(&mut self) {
        let mut changed = false;
        if let Some(offset) = self.scroll.take() {
            changed |= self.back_gate.observe(offset);
            changed |= self.top_gate.observe(offset);
        }
        changed |= self.back_gate.tick();
        if changed {
            self.mark_dirty();
        }
    }

    pub(crate) fn back_visible(&self) -> bool {
        self.back_gate.visible()
    }

    pub(crate) fn top_visible(&self) -> bool {
        self.top_gate.visible()
    }
}
