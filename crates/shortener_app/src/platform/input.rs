use thiserror::Error;

/// One line of terminal input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put the text in the input field and press Shorten.
    Shorten(String),
    /// Copy the shortened URL of the 1-based entry.
    Copy(usize),
    /// Open the original URL of the 1-based entry.
    Open(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command :{0} (type :help)")]
    Unknown(String),
    #[error(":{command} needs an entry number, e.g. :{command} 1")]
    MissingIndex { command: &'static str },
    #[error("{0:?} is not an entry number")]
    BadIndex(String),
}

pub const HELP: &str = "\
Type or paste a URL and press Enter to shorten it.
  :copy N   copy entry N's short URL to the clipboard
  :open N   open entry N's original URL in the browser
  :list     redraw the list
  :help     show this help
  :quit     exit";

/// Parses a line. Anything not starting with `:` is URL input, passed through
/// without trimming except for the line terminator.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Shorten(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    match name {
        "copy" | "c" => parse_index("copy", parts.next()).map(Command::Copy),
        "open" | "o" => parse_index("open", parts.next()).map(Command::Open),
        "list" | "l" => Ok(Command::List),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_index(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingIndex { command })?;
    match arg.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(CommandError::BadIndex(arg.to_string())),
    }
}
