use crate::form::SubmissionStatus;
use crate::route::Route;

/// Severity of the inline status line under the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
}

/// One inline status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub tone: StatusTone,
    pub text: String,
}

/// Mount/show state of the floating back control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackControlView {
    pub mounted: bool,
    pub visible: bool,
}

/// Everything the shell needs to render one frame of UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    pub prefill: String,
    pub message_draft: String,
    pub status: SubmissionStatus,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub status_line: Option<StatusLine>,
    pub back_control: BackControlView,
    pub top_visible: bool,
    pub dirty: bool,
}
