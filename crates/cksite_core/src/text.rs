//! User-facing strings and relay constants.
//!
//! The site ships in Korean; keeping every string here keeps the rest of
//! the core free of copy.

/// Fixed subject line attached to every relay submission.
pub const RELAY_SUBJECT: &str = "[C&KInsight] 전략 미팅 요청";

/// Fixed source tag identifying this form to the relay inbox.
pub const RELAY_SOURCE: &str = "ckinsight.co web form";

/// Submit button label while idle.
pub const LABEL_SUBMIT_IDLE: &str = "상담 신청하기";

/// Submit button label while a submission is in flight.
pub const LABEL_SUBMIT_LOADING: &str = "전송 중…";

/// Status line shown after a successful submission.
pub const MSG_SUBMIT_SUCCESS: &str = "제출되었습니다! 담당자가 곧 연락드리겠습니다.";

/// Generic failure shown when the relay rejects a submission without a
/// message of its own.
pub const MSG_SUBMIT_ERROR: &str = "제출 중 오류가 발생했습니다.";

/// Shown when no response could be obtained from the relay at all.
pub const MSG_NETWORK_ERROR: &str = "네트워크 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
