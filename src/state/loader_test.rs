use super::*;

fn started() -> LoaderState {
    let mut state = LoaderState::default();
    state.set_step(OnboardingStep::Start);
    state
}

// =============================================================
// Step transitions
// =============================================================

#[test]
fn default_state_shows_connecting() {
    let state = LoaderState::default();
    assert_eq!(state.step(), OnboardingStep::Start);
    assert_eq!(state.text(), "Connecting...");
    assert!(state.is_visible());
}

#[test]
fn start_step_shows_connecting() {
    let state = started();
    assert_eq!(state.text(), "Connecting...");
    assert!(state.is_visible());
}

#[test]
fn scene_steps_update_text() {
    let mut state = started();
    state.set_step(OnboardingStep::SceneLoading);
    assert_eq!(state.text(), "Loading...");
    state.set_step(OnboardingStep::SceneLoaded);
    assert_eq!(state.text(), "Entering world...");
    state.set_step(OnboardingStep::AwaitingInput);
    assert_eq!(state.text(), "Click to join");
}

#[test]
fn success_hides_overlay_and_start_brings_it_back() {
    let mut state = started();
    state.set_step(OnboardingStep::Success);
    assert!(!state.is_visible());

    state.set_step(OnboardingStep::Start);
    assert!(state.is_visible());
    assert_eq!(state.text(), "Connecting...");
}

#[test]
fn unknown_step_deserializes_to_other_and_shows_loading() {
    let step: OnboardingStep = serde_json::from_value(serde_json::json!("warming_up")).unwrap();
    assert_eq!(step, OnboardingStep::Other);

    let mut state = started();
    state.set_step(step);
    assert_eq!(state.text(), "Loading...");
}

// =============================================================
// Object counts
// =============================================================

#[test]
fn object_count_updates_text_only_while_scene_loading() {
    let mut state = started();
    state.set_objects_to_load(5);
    assert_eq!(state.text(), "Connecting...");

    state.set_step(OnboardingStep::SceneLoading);
    state.set_objects_to_load(4);
    assert_eq!(state.text(), "4 objects remaining");
    state.set_objects_to_load(1);
    assert_eq!(state.text(), "1 object remaining");
}

#[test]
fn repeated_object_count_is_ignored() {
    let mut state = started();
    state.set_step(OnboardingStep::SceneLoading);
    state.set_objects_to_load(3);
    state.set_step(OnboardingStep::SceneLoading);
    state.set_objects_to_load(3);
    assert_eq!(state.text(), "3 objects remaining");
}
