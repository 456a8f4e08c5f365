use crate::form::{Field, SubmissionId, SubmitFailure};

/// Everything that can happen to the app, as seen by the pure core.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document location captured once at boot: raw query string and
    /// fragment, leading `?`/`#` markers allowed.
    LocationLoaded { search: String, fragment: String },
    /// The fragment path changed after in-app navigation.
    RouteChanged { path: String },
    /// User edited a named contact-form input.
    FieldEdited { field: Field, value: String },
    /// User pressed the submit control.
    SubmitClicked,
    /// The relay settled a submission.
    SubmissionSettled {
        submission_id: SubmissionId,
        result: Result<(), SubmitFailure>,
    },
    /// Raw scroll event from the widgets' scroll container.
    ScrollMoved { offset: f64 },
    /// Animation-frame tick; batches scroll recomputation.
    Frame,
    /// User pressed the back affordance. Carries the browser history depth.
    BackClicked { history_len: u32 },
    /// User pressed the scroll-to-top affordance.
    TopClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
