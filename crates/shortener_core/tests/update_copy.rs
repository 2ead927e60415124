use shortener_core::{update, AppState, Effect, Msg, COPIED_RESET_DELAY};

const SHORT_A: &str = "http://short.url/AAAAAB";
const SHORT_B: &str = "http://short.url/AAAAAC";

fn with_entry() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("https://example.com".to_string()),
    );
    let (state, _) = update(state, Msg::ShortenClicked { now_millis: 0 });
    state
}

fn reset_generation(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::ScheduleCopiedReset { generation, after }] => {
            assert_eq!(*after, COPIED_RESET_DELAY);
            *generation
        }
        other => panic!("expected a single reset effect, got {other:?}"),
    }
}

#[test]
fn copy_click_requests_clipboard_write_only() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::CopyClicked(SHORT_A.to_string()));

    assert_eq!(next, state);
    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            text: SHORT_A.to_string()
        }]
    );
}

#[test]
fn clipboard_success_sets_marker_then_timer_clears_it() {
    let (state, effects) = update(AppState::new(), Msg::ClipboardWritten(SHORT_A.to_string()));
    assert_eq!(state.copied(), Some(SHORT_A));
    let generation = reset_generation(&effects);

    let (state, effects) = update(state, Msg::CopiedResetElapsed { generation });
    assert_eq!(state.copied(), None);
    assert!(effects.is_empty());
}

#[test]
fn marker_survives_unrelated_actions_until_reset() {
    let (state, effects) = update(AppState::new(), Msg::ClipboardWritten(SHORT_A.to_string()));
    let generation = reset_generation(&effects);

    let (state, _) = update(state, Msg::InputChanged("typing".to_string()));
    let (state, _) = update(state, Msg::ShortenClicked { now_millis: 7 });
    let (state, _) = update(state, Msg::FollowClicked("https://example.com".to_string()));
    assert_eq!(state.copied(), Some(SHORT_A));

    let (state, _) = update(state, Msg::CopiedResetElapsed { generation });
    assert_eq!(state.copied(), None);
}

#[test]
fn later_copy_supersedes_earlier_timer() {
    let (state, effects) = update(AppState::new(), Msg::ClipboardWritten(SHORT_A.to_string()));
    let first = reset_generation(&effects);
    let (state, effects) = update(state, Msg::ClipboardWritten(SHORT_B.to_string()));
    let second = reset_generation(&effects);
    assert_ne!(first, second);

    let (state, _) = update(state, Msg::CopiedResetElapsed { generation: first });
    assert_eq!(state.copied(), Some(SHORT_B));

    let (state, _) = update(state, Msg::CopiedResetElapsed { generation: second });
    assert_eq!(state.copied(), None);
}

#[test]
fn view_labels_copied_row() {
    let state = with_entry();
    let shortened = state.entries()[0].shortened.clone();

    assert_eq!(state.view().entries[0].copy_label(), "Copy");

    let (state, _) = update(state, Msg::ClipboardWritten(shortened.clone()));
    let view = state.view();
    assert!(view.entries[0].copied);
    assert_eq!(view.entries[0].copy_label(), "Copied!");
    assert_eq!(view.copied.as_deref(), Some(shortened.as_str()));
}
