//! Terminal front end: wires the pure core to stdin/stdout, storage, the
//! clipboard, and the system URL opener.
mod app;
mod clock;
mod config;
mod effects;
mod event;
mod input;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
