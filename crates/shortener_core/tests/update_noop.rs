use shortener_core::{update, AppState, Effect, Msg};

#[test]
fn repeated_input_leaves_state_unchanged() {
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("abc".to_string()));
    state.consume_dirty();

    let (next, effects) = update(state.clone(), Msg::InputChanged("abc".to_string()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn follow_opens_url_without_state_change() {
    let state = AppState::new();
    let before = state.view();

    let (next, effects) = update(
        state,
        Msg::FollowClicked("https://example.com/page".to_string()),
    );

    assert_eq!(next.view(), before);
    assert_eq!(
        effects,
        vec![Effect::OpenUrl {
            url: "https://example.com/page".to_string()
        }]
    );
}
