//! Browser entry points. The JS host forwards DOM events into
//! [`CkSiteApp`] and applies the JSON commands it drains back, so all DOM
//! access stays on the host side.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use cksite_engine::{FormspreeRelay, RelaySettings, SubmissionId, SubmitError};

use crate::events::ShellEvent;
use crate::shell::Shell;

type SettledQueue = Rc<RefCell<Vec<(SubmissionId, Result<(), SubmitError>)>>>;

/// The whole site core, exported to the browser host.
#[wasm_bindgen]
pub struct CkSiteApp {
    shell: Shell,
    relay: FormspreeRelay,
    settled: SettledQueue,
}

#[wasm_bindgen]
impl CkSiteApp {
    /// Build the app; `endpoint` overrides the production relay (tests).
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: Option<String>) -> CkSiteApp {
        let mut settings = RelaySettings::default();
        if let Some(endpoint) = endpoint {
            settings.endpoint = endpoint;
        }
        CkSiteApp {
            shell: Shell::new(),
            relay: FormspreeRelay::new(settings),
            settled: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Document ready: hand over `location.search` and `location.hash`.
    pub fn boot(&mut self, search: String, fragment: String) {
        self.handle(ShellEvent::Booted { search, fragment });
    }

    /// `hashchange`: the new fragment path.
    pub fn fragment_changed(&mut self, path: String) {
        self.handle(ShellEvent::FragmentChanged { path });
    }

    /// `input` on a named form control.
    pub fn field_edited(&mut self, name: String, value: String) {
        self.handle(ShellEvent::FieldEdited { name, value });
    }

    /// Contact-form submit.
    pub fn submit_clicked(&mut self) {
        self.handle(ShellEvent::SubmitClicked);
    }

    /// Raw scroll event; cheap, the shell coalesces per frame.
    pub fn scroll_changed(&mut self, offset: f64) {
        self.handle(ShellEvent::ScrollChanged { offset });
    }

    /// `requestAnimationFrame` tick: settles finished submissions, then
    /// runs the frame-batched recomputation.
    pub fn animation_frame(&mut self) {
        let settled: Vec<_> = self.settled.borrow_mut().drain(..).collect();
        for (submission_id, result) in settled {
            self.handle(ShellEvent::SubmissionSettled {
                submission_id,
                result,
            });
        }
        self.handle(ShellEvent::AnimationFrame);
    }

    /// Back affordance; pass `history.length`.
    pub fn back_clicked(&mut self, history_len: u32) {
        self.handle(ShellEvent::BackClicked { history_len });
    }

    /// Scroll-to-top affordance.
    pub fn top_clicked(&mut self) {
        self.handle(ShellEvent::TopClicked);
    }

    /// Drain queued host commands as a JSON array.
    pub fn drain_commands(&mut self) -> String {
        let commands = self.shell.drain_commands();
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_owned())
    }
}

impl CkSiteApp {
    fn handle(&mut self, event: ShellEvent) {
        self.shell.handle_event(event);
        self.pump_submissions();
    }

    /// Launch each pending submission on the browser's microtask queue;
    /// results land in the settled inbox for the next frame.
    fn pump_submissions(&mut self) {
        for pending in self.shell.take_submissions() {
            let relay = self.relay.clone();
            let settled = self.settled.clone();
            let submission_id = pending.submission_id;
            let fields: Vec<(String, String)> = pending
                .payload
                .into_fields()
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect();
            wasm_bindgen_futures::spawn_local(async move {
                let result = relay.submit(&fields).await;
                settled.borrow_mut().push((submission_id, result));
            });
        }
    }
}
