use std::sync::Once;

use cksite_core::{update, AppState, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn booted() -> AppState {
    let (state, _effects) = update(
        AppState::new(),
        Msg::LocationLoaded {
            search: String::new(),
            fragment: "#/".to_owned(),
        },
    );
    state
}

fn scrolled_to(state: AppState, offset: f64) -> AppState {
    let (state, effects) = update(state, Msg::ScrollMoved { offset });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::Frame);
    assert!(effects.is_empty());
    state
}

#[test]
fn back_control_is_visible_at_mount() {
    init_logging();
    let view = booted().view();
    // Zero threshold: visible at rest, no scroll event required.
    assert!(view.back_control.mounted);
    assert!(view.back_control.visible);
    assert!(!view.top_visible);
}

#[test]
fn top_control_obeys_the_forty_pixel_threshold() {
    init_logging();
    let state = scrolled_to(booted(), 39.0);
    assert!(!state.view().top_visible);

    let state = scrolled_to(state, 41.0);
    assert!(state.view().top_visible);

    let state = scrolled_to(state, 40.0);
    assert!(!state.view().top_visible);
}

#[test]
fn recomputation_waits_for_the_frame_tick() {
    init_logging();
    let (state, _effects) = update(booted(), Msg::ScrollMoved { offset: 500.0 });
    assert!(!state.view().top_visible);

    let (state, _effects) = update(state, Msg::Frame);
    assert!(state.view().top_visible);
}

#[test]
fn scroll_bursts_coalesce_to_the_latest_offset() {
    init_logging();
    let (state, _effects) = update(booted(), Msg::ScrollMoved { offset: 500.0 });
    let (state, _effects) = update(state, Msg::ScrollMoved { offset: 10.0 });
    let (state, _effects) = update(state, Msg::Frame);
    assert!(!state.view().top_visible);
}

#[test]
fn back_press_with_deep_history_pops_an_entry() {
    init_logging();
    let (_state, effects) = update(booted(), Msg::BackClicked { history_len: 3 });
    assert_eq!(effects, vec![Effect::HistoryBack]);
}

#[test]
fn back_press_without_history_goes_home() {
    init_logging();
    let (_state, effects) = update(booted(), Msg::BackClicked { history_len: 1 });
    assert_eq!(effects, vec![Effect::NavigateHome]);
}

#[test]
fn top_press_scrolls_only_while_visible() {
    init_logging();
    let (state, effects) = update(booted(), Msg::TopClicked);
    assert!(effects.is_empty());

    let state = scrolled_to(state, 120.0);
    let (_state, effects) = update(state, Msg::TopClicked);
    assert_eq!(effects, vec![Effect::ScrollToTop]);
}
