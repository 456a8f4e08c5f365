//! Site engine: form-relay IO and effect execution.
#[cfg(not(target_arch = "wasm32"))]
mod engine;
mod relay;
mod types;

#[cfg(not(target_arch = "wasm32"))]
pub use engine::EngineHandle;
#[cfg(not(target_arch = "wasm32"))]
pub use relay::FormRelay;
pub use relay::{FormspreeRelay, RelaySettings, DEFAULT_RELAY_ENDPOINT};
pub use types::{EngineEvent, SubmissionFields, SubmissionId, SubmitError};
