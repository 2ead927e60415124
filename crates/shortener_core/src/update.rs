use app_logging::{app_debug, app_info};

use crate::{
    generate_at, is_valid_url, AppState, Effect, Msg, ShortenedEntry, SubmitError,
    COPIED_RESET_DELAY,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ShortenClicked { now_millis } => {
            state.set_error(None);
            match shorten(&mut state, now_millis) {
                Ok(entry) => {
                    app_info!(
                        "Shortened {} -> {} ({} entries)",
                        entry.original,
                        entry.shortened,
                        state.entries().len()
                    );
                    state.clear_input();
                    vec![Effect::PersistEntries(state.entries().to_vec())]
                }
                Err(err) => {
                    app_debug!("Shorten rejected: {}", err);
                    state.set_error(Some(err));
                    Vec::new()
                }
            }
        }
        Msg::CopyClicked(shortened) => vec![Effect::WriteClipboard { text: shortened }],
        Msg::ClipboardWritten(shortened) => {
            let generation = state.mark_copied(shortened);
            vec![Effect::ScheduleCopiedReset {
                generation,
                after: COPIED_RESET_DELAY,
            }]
        }
        Msg::CopiedResetElapsed { generation } => {
            if !state.expire_copied(generation) {
                app_debug!("Ignoring superseded copy reset {}", generation);
            }
            Vec::new()
        }
        Msg::FollowClicked(original) => vec![Effect::OpenUrl { url: original }],
        Msg::EntriesLoaded(entries) => {
            app_info!("Restored {} shortened URLs", entries.len());
            state.replace_entries(entries);
            Vec::new()
        }
    };

    (state, effects)
}

fn shorten(state: &mut AppState, now_millis: i64) -> Result<ShortenedEntry, SubmitError> {
    let input = state.input();
    if input.is_empty() {
        return Err(SubmitError::EmptyInput);
    }
    if !is_valid_url(input) {
        return Err(SubmitError::InvalidUrl);
    }
    if state.contains_original(input) {
        return Err(SubmitError::AlreadyShortened);
    }

    let entry = ShortenedEntry::new(input, generate_at(input, now_millis));
    state.push_entry(entry.clone());
    Ok(entry)
}
