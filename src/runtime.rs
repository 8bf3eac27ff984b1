//! Host runtime seams and the registration adapter.
//!
//! The tree only needs two things from whatever runs it:
//!   Output     - emit one line of user-facing text (colour tags left intact)
//!   Registrar  - bind a raw top-level name to a handler / completion provider
//!
//! `register_command` wires a compiled top-level [`Command`] into a `Registrar`,
//! once per name and alias.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::render::{StyleOptions, render};
use crate::tree::{Command, Context};

/// Line-oriented output sink.
pub trait Output {
    fn line(&self, text: &str);
}

/// Raw command handler as the runtime sees it: the argument vector after the name.
pub type RawHandler = Box<dyn Fn(&[String], &dyn Output) -> Result<()> + Send + Sync>;

/// Raw completion provider: typed-so-far argument vector -> suggestions.
pub type RawCompleter = Box<dyn Fn(&[String]) -> Vec<String> + Send + Sync>;

pub trait Registrar {
    fn register_command(&mut self, name: &str, handler: RawHandler);
    fn register_completion(&mut self, name: &str, completer: RawCompleter);
}

/// Register `command` under its name and every alias.
///
/// Each registration builds its own fresh [`Context`] per call; aliases are
/// independent entry points into the same compiled tree.
pub fn register_command(command: Arc<Command>, registrar: &mut impl Registrar) {
    let names: Vec<String> = command.invocable_names().map(str::to_string).collect();
    for name in names {
        let cmd = Arc::clone(&command);
        registrar.register_command(
            &name,
            Box::new(move |args: &[String], out: &dyn Output| {
                cmd.dispatch(args, &Context::new(args), out)
            }),
        );

        if command.has_params() {
            let cmd = Arc::clone(&command);
            registrar.register_completion(
                &name,
                Box::new(move |args: &[String]| cmd.params(args, &Context::new(args))),
            );
        }
        tracing::debug!(name = %name, completion = command.has_params(), "registered command");
    }
}

/// Renders colour tags and prints to stdout.
#[derive(Clone, Debug, Default)]
pub struct StdoutOutput {
    style: StyleOptions,
}

impl StdoutOutput {
    pub fn new(style: StyleOptions) -> Self {
        Self { style }
    }
}

impl Output for StdoutOutput {
    fn line(&self, text: &str) {
        println!("{}", render(text, &self.style));
    }
}

/// Collects raw lines (tags untouched).
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut l| std::mem::take(&mut *l))
            .unwrap_or_default()
    }
}

impl Output for RecordingOutput {
    fn line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }
}
