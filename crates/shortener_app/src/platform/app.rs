use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use app_logging::{app_debug, app_info, app_warn};
use clap::Parser;
use shortener_core::{update, AppState, Clock, Msg};
use shortener_store::{ensure_dir, FileStore, KeyValueStore};

use super::clock::SystemClock;
use super::config::Cli;
use super::effects::{ArboardClipboard, ClipboardWriter, EffectRunner, SystemOpener};
use super::event::UiEvent;
use super::input::{parse_command, Command, HELP};
use super::persistence::load_session_entries;
use super::{logging, ui};

pub fn run_app() -> Result<()> {
    let config = Cli::parse().into_config()?;
    ensure_dir(&config.data_dir)
        .with_context(|| format!("cannot use data directory {:?}", config.data_dir))?;
    logging::initialize(&config.log_destination, config.log_level);
    app_info!("Starting with data directory {:?}", config.data_dir);

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.data_dir.clone()));
    let (event_tx, event_rx) = mpsc::channel::<UiEvent>();

    let runner = EffectRunner::new(
        store.clone(),
        Arc::new(SystemOpener),
        Box::new(|| -> Result<Box<dyn ClipboardWriter>> {
            Ok(Box::new(ArboardClipboard::new()?))
        }),
        event_tx.clone(),
    );

    spawn_stdin_reader(event_tx);

    let mut session = Session {
        state: AppState::new(),
        runner,
        clock: Box::new(SystemClock),
        out: io::stdout(),
    };
    session.dispatch(Msg::EntriesLoaded(load_session_entries(store.as_ref())))?;
    session.print(HELP)?;
    session.prompt()?;

    for event in event_rx {
        match event {
            UiEvent::Msg(msg) => session.dispatch(msg)?,
            UiEvent::Line(line) => match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => session.handle_command(command)?,
                Err(err) => session.print(&err.to_string())?,
            },
            UiEvent::InputClosed => break,
        }
        session.prompt()?;
    }

    app_info!("Exiting with {} entries", session.state.entries().len());
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_lines(stdin.lock(), &event_tx);
    });
}

/// Sends each line as `UiEvent::Line`, then `UiEvent::InputClosed` once the
/// reader is exhausted or fails. Invalid UTF-8 is replaced, not fatal.
fn forward_lines<R: BufRead>(mut reader: R, event_tx: &mpsc::Sender<UiEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\r', '\n']).to_string();
                if event_tx.send(UiEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                app_warn!("Stopped reading input: {}", err);
                break;
            }
        }
    }
    let _ = event_tx.send(UiEvent::InputClosed);
}

struct Session<W: Write> {
    state: AppState,
    runner: EffectRunner,
    clock: Box<dyn Clock>,
    out: W,
}

impl<W: Write> Session<W> {
    fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Shorten(text) => {
                self.dispatch(Msg::InputChanged(text))?;
                let now_millis = self.clock.now_millis();
                self.dispatch(Msg::ShortenClicked { now_millis })
            }
            Command::Copy(index) => match self.state.entries().get(index - 1) {
                Some(entry) => self.dispatch(Msg::CopyClicked(entry.shortened.clone())),
                None => self.print(&format!("No entry #{index}")),
            },
            Command::Open(index) => match self.state.entries().get(index - 1) {
                Some(entry) => self.dispatch(Msg::FollowClicked(entry.original.clone())),
                None => self.print(&format!("No entry #{index}")),
            },
            Command::List => self.render(),
            Command::Help => self.print(HELP),
            // Handled by the loop.
            Command::Quit => Ok(()),
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        app_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let lines = ui::render::render(&self.state.view());
        writeln!(self.out)?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}
