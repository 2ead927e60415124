use shortener_core::Msg;

/// Everything the main loop reacts to. Producers are the stdin reader, the
/// clipboard worker, and copy-reset timers.
#[derive(Debug)]
pub enum UiEvent {
    /// A message for the core state machine.
    Msg(Msg),
    /// One raw line typed by the user.
    Line(String),
    /// Stdin reached end of file.
    InputClosed,
}
