//! Site core: pure state machine and view-model helpers.
mod effect;
mod form;
mod msg;
mod prefill;
mod query;
mod route;
mod scroll;
mod state;
mod text;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{
    ContactForm, Field, FormPayload, SubmissionId, SubmissionStatus, SubmitFailure, FIELD_COMPANY,
    FIELD_EMAIL, FIELD_HONEYPOT, FIELD_MESSAGE, FIELD_NAME, FIELD_PHONE, FIELD_SOURCE,
    FIELD_SUBJECT,
};
pub use msg::Msg;
pub use prefill::decode_message;
pub use query::{recover_param, PREFILL_PARAM};
pub use route::{CaseStudy, InsightTopic, Route, ServiceTopic};
pub use scroll::{
    BackNav, FrameCoalescer, MountedGate, VisibilityGate, DEFAULT_TOP_THRESHOLD,
    UNMOUNT_DELAY_FRAMES,
};
pub use state::AppState;
pub use text::{
    LABEL_SUBMIT_IDLE, LABEL_SUBMIT_LOADING, MSG_NETWORK_ERROR, MSG_SUBMIT_ERROR,
    MSG_SUBMIT_SUCCESS, RELAY_SOURCE, RELAY_SUBJECT,
};
pub use update::update;
pub use view_model::{AppViewModel, BackControlView, StatusLine, StatusTone};
