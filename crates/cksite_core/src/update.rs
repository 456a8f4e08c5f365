use crate::scroll::BackNav;
use crate::{prefill, query};
use crate::{AppState, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LocationLoaded { search, fragment } => {
            let raw = query::recover_param(&search, &fragment, query::PREFILL_PARAM);
            state.set_prefill(prefill::decode_message(raw.as_deref()));
            match Route::parse(fragment_path(&fragment)) {
                Some(route) => {
                    state.enter_route(route);
                    Vec::new()
                }
                None => {
                    state.enter_route(Route::Home);
                    vec![Effect::ReplaceRoute { route: Route::Home }]
                }
            }
        }
        Msg::RouteChanged { path } => {
            let (route, mut effects) = match Route::parse(&path) {
                Some(route) => (route, Vec::new()),
                None => (
                    Route::Home,
                    vec![Effect::ReplaceRoute { route: Route::Home }],
                ),
            };
            state.enter_route(route);
            // The router jumps back to the top on every navigation.
            effects.push(Effect::ResetScroll);
            effects
        }
        Msg::FieldEdited { field, value } => {
            state.edit_field(field, value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.is_loading() {
                // Submit control is disabled while loading; ignore repeats.
                Vec::new()
            } else {
                let (submission_id, payload) = state.begin_submission();
                vec![Effect::SubmitForm {
                    submission_id,
                    payload,
                }]
            }
        }
        Msg::SubmissionSettled {
            submission_id,
            result,
        } => {
            state.settle_submission(submission_id, result);
            Vec::new()
        }
        Msg::ScrollMoved { offset } => {
            state.record_scroll(offset);
            Vec::new()
        }
        Msg::Frame => {
            state.run_frame();
            Vec::new()
        }
        Msg::BackClicked { history_len } => {
            if state.back_visible() {
                match BackNav::for_history_len(history_len) {
                    BackNav::HistoryBack => vec![Effect::HistoryBack],
                    BackNav::GoHome => vec![Effect::NavigateHome],
                }
            } else {
                Vec::new()
            }
        }
        Msg::TopClicked => {
            if state.top_visible() {
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Path portion of a fragment: `#/cases/dtx?msg=x` -> `/cases/dtx`.
fn fragment_path(fragment: &str) -> &str {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment.split('?').next().unwrap_or(fragment)
}
