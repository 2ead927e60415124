//! Shortener core: encoder, validator, and the pure session state machine.
mod effect;
mod encoder;
mod entry;
mod error;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, COPIED_RESET_DELAY};
pub use encoder::{
    encode_seed, generate, generate_at, hash_url, Clock, FixedClock, ShortCode, ALPHABET,
    CODE_LEN,
};
pub use entry::{ShortenedEntry, SHORT_URL_PREFIX};
pub use error::SubmitError;
pub use msg::Msg;
pub use state::{AppState, CopyGeneration};
pub use update::update;
pub use validate::is_valid_url;
pub use view_model::{AppViewModel, EntryRowView};
