//! Platform shell for the marketing site: host event handling, the host
//! command queue, and the browser entry points.
mod commands;
#[cfg(not(target_arch = "wasm32"))]
mod effects;
mod events;
mod render;
mod shell;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use commands::{ShellCommand, StatusTone};
#[cfg(not(target_arch = "wasm32"))]
pub use effects::EffectRunner;
pub use events::ShellEvent;
pub use render::render;
pub use shell::{PendingSubmission, Shell};
#[cfg(target_arch = "wasm32")]
pub use wasm::CkSiteApp;
