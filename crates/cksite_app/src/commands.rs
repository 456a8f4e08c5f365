use serde::Serialize;

/// Instructions for the host, drained in order from the shell's queue.
///
/// Serialized as tagged JSON for the browser bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShellCommand {
    /// Replace the message textarea contents (boot pre-fill, post-success
    /// clear).
    SetMessageDraft { text: String },
    /// Enable/disable the submit control and set its label.
    SetSubmitControl { enabled: bool, label: String },
    /// Show the inline status line under the form.
    SetStatusLine { tone: StatusTone, text: String },
    /// Remove the inline status line.
    ClearStatusLine,
    /// Mount/show state for the floating back control.
    SetBackControl { mounted: bool, visible: bool },
    /// Show state for the floating scroll-to-top control.
    SetTopControl { visible: bool },
    /// Replace the current location with a route path.
    ReplaceRoute { path: String },
    /// Push the root route (back-navigation fallback).
    NavigateHome,
    /// Pop one history entry.
    HistoryBack,
    /// Smooth-scroll the window to the top.
    ScrollToTop,
    /// Jump to the top instantly (route-change reset).
    ResetScroll,
}

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Negative,
}
