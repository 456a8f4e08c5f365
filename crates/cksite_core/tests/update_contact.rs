use std::sync::Once;

use cksite_core::{
    update, AppState, Effect, Field, Msg, Route, StatusTone, SubmissionStatus, SubmitFailure,
    FIELD_HONEYPOT, FIELD_SOURCE, FIELD_SUBJECT, LABEL_SUBMIT_IDLE, LABEL_SUBMIT_LOADING,
    MSG_NETWORK_ERROR, MSG_SUBMIT_ERROR, MSG_SUBMIT_SUCCESS, RELAY_SOURCE, RELAY_SUBJECT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn boot(search: &str, fragment: &str) -> AppState {
    let (state, _effects) = update(
        AppState::new(),
        Msg::LocationLoaded {
            search: search.to_owned(),
            fragment: fragment.to_owned(),
        },
    );
    state
}

fn edit(state: AppState, field: Field, value: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FieldEdited {
            field,
            value: value.to_owned(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn filled_contact_form() -> AppState {
    let state = boot("", "#/contact");
    let state = edit(state, Field::Name, "김희연");
    let state = edit(state, Field::Email, "kim@example.com");
    edit(state, Field::Message, "전략 미팅을 요청드립니다.")
}

#[test]
fn boot_prefills_message_from_fragment_query() {
    init_logging();
    let state = boot("", "#/contact?msg=hello%2520world");
    let view = state.view();

    assert_eq!(view.route, Route::Contact);
    assert_eq!(view.prefill, "hello world");
    assert_eq!(view.message_draft, "hello world");
    assert!(view.dirty);
}

#[test]
fn boot_without_parameter_leaves_empty_draft() {
    init_logging();
    let view = boot("", "#/contact").view();
    assert_eq!(view.prefill, "");
    assert_eq!(view.message_draft, "");
    assert_eq!(view.status, SubmissionStatus::Idle);
}

#[test]
fn boot_with_unknown_fragment_redirects_home() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::LocationLoaded {
            search: String::new(),
            fragment: "#/no-such-page".to_owned(),
        },
    );
    assert_eq!(state.view().route, Route::Home);
    assert_eq!(effects, vec![Effect::ReplaceRoute { route: Route::Home }]);
}

#[test]
fn submit_moves_idle_to_loading_with_full_payload() {
    init_logging();
    let state = filled_contact_form();
    let (state, effects) = update(state, Msg::SubmitClicked);
    let view = state.view();

    assert_eq!(view.status, SubmissionStatus::Loading);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, LABEL_SUBMIT_LOADING);

    assert_eq!(effects.len(), 1);
    let Effect::SubmitForm {
        submission_id,
        payload,
    } = &effects[0]
    else {
        panic!("expected SubmitForm, got {:?}", effects[0]);
    };
    assert_eq!(*submission_id, 1);
    let fields = payload.fields();
    assert!(fields.contains(&(FIELD_HONEYPOT, String::new())));
    assert!(fields.contains(&(FIELD_SUBJECT, RELAY_SUBJECT.to_owned())));
    assert!(fields.contains(&(FIELD_SOURCE, RELAY_SOURCE.to_owned())));
    assert!(fields.contains(&("name", "김희연".to_owned())));
    assert!(fields.contains(&("email", "kim@example.com".to_owned())));
    assert!(fields.contains(&("message", "전략 미팅을 요청드립니다.".to_owned())));
}

#[test]
fn resubmit_while_loading_is_ignored() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().status, SubmissionStatus::Loading);
}

#[test]
fn success_clears_fields_and_reports() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::SubmissionSettled {
            submission_id: 1,
            result: Ok(()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status, SubmissionStatus::Success);
    assert_eq!(view.message_draft, "");
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, LABEL_SUBMIT_IDLE);
    let line = view.status_line.expect("status line after success");
    assert_eq!(line.tone, StatusTone::Positive);
    assert_eq!(line.text, MSG_SUBMIT_SUCCESS);
}

#[test]
fn relay_message_is_surfaced_verbatim() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::SubmissionSettled {
            submission_id: 1,
            result: Err(SubmitFailure::Rejected {
                message: Some("Email is required".to_owned()),
            }),
        },
    );

    let line = state.view().status_line.expect("status line after error");
    assert_eq!(line.tone, StatusTone::Negative);
    assert_eq!(line.text, "Email is required");
}

#[test]
fn missing_relay_message_falls_back_to_generic_text() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::SubmissionSettled {
            submission_id: 1,
            result: Err(SubmitFailure::Rejected { message: None }),
        },
    );
    assert_eq!(
        state.view().status,
        SubmissionStatus::Error(MSG_SUBMIT_ERROR.to_owned())
    );
}

#[test]
fn transport_failure_uses_network_text() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::SubmissionSettled {
            submission_id: 1,
            result: Err(SubmitFailure::Network),
        },
    );
    assert_eq!(
        state.view().status,
        SubmissionStatus::Error(MSG_NETWORK_ERROR.to_owned())
    );
}

#[test]
fn stale_settlement_is_ignored() {
    init_logging();
    let (state, _effects) = update(filled_contact_form(), Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::SubmissionSettled {
            submission_id: 7,
            result: Ok(()),
        },
    );
    assert_eq!(state.view().status, SubmissionStatus::Loading);
}

#[test]
fn nonempty_honeypot_still_submits() {
    init_logging();
    let state = edit(filled_contact_form(), Field::Honeypot, "spam-bot");
    let (_state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(effects.len(), 1);
    let Effect::SubmitForm { payload, .. } = &effects[0] else {
        panic!("expected SubmitForm, got {:?}", effects[0]);
    };
    assert!(payload
        .fields()
        .contains(&(FIELD_HONEYPOT, "spam-bot".to_owned())));
}

#[test]
fn reentering_contact_remounts_the_form() {
    init_logging();
    let state = boot("", "#/contact?msg=preset");
    let state = edit(state, Field::Message, "typed over");

    let (state, effects) = update(
        state,
        Msg::RouteChanged {
            path: "/about".to_owned(),
        },
    );
    assert_eq!(effects, vec![Effect::ResetScroll]);
    assert_eq!(state.view().route, Route::About);

    let (state, _effects) = update(
        state,
        Msg::RouteChanged {
            path: "/contact".to_owned(),
        },
    );
    let view = state.view();
    assert_eq!(view.route, Route::Contact);
    assert_eq!(view.message_draft, "preset");
    assert_eq!(view.status, SubmissionStatus::Idle);
}

#[test]
fn unknown_route_redirects_home_with_scroll_reset() {
    init_logging();
    let (state, effects) = update(
        boot("", ""),
        Msg::RouteChanged {
            path: "/bogus".to_owned(),
        },
    );
    assert_eq!(state.view().route, Route::Home);
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceRoute { route: Route::Home },
            Effect::ResetScroll,
        ]
    );
}
