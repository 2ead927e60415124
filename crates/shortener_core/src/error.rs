use thiserror::Error;

/// Reasons a shorten request is rejected. Display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a URL")]
    EmptyInput,
    #[error("Invalid URL format")]
    InvalidUrl,
    #[error("URL already shortened")]
    AlreadyShortened,
}
