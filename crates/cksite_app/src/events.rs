use cksite_engine::{SubmissionId, SubmitError};

/// Host-side happenings delivered to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Document ready: raw query string and fragment from the location.
    Booted { search: String, fragment: String },
    /// The fragment path changed (in-app navigation).
    FragmentChanged { path: String },
    /// A named form input changed.
    FieldEdited { name: String, value: String },
    /// Contact-form submit control pressed.
    SubmitClicked,
    /// Raw scroll offset of the widgets' scroll container.
    ScrollChanged { offset: f64 },
    /// One animation frame elapsed.
    AnimationFrame,
    /// Back affordance pressed; carries `history.length`.
    BackClicked { history_len: u32 },
    /// Scroll-to-top affordance pressed.
    TopClicked,
    /// A relay submission settled (delivered by the platform driver).
    SubmissionSettled {
        submission_id: SubmissionId,
        result: Result<(), SubmitError>,
    },
}
