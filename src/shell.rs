/*!
shell.rs - in-process host runtime.

A minimal stand-in for the environment a command tree is normally plugged
into: it owns the raw name -> handler table filled by
[`register_command`](crate::runtime::register_command), splits input lines
with `shell-words`, and answers tab-completion queries.

Line handling:
  - `execute_line("tree ping")`  -> handler for `tree` with ["ping"]
  - `complete_line("tree pi")`   -> completer for `tree` with ["pi"]
  - `complete_line("tree ")`     -> completer for `tree` with [""]
  - `complete_line("tr")`        -> registered names starting with "tr"

Raw names are matched case-insensitively. Registering a name twice replaces
the earlier binding.
*/

use anyhow::{Context, Result};

use crate::runtime::{Output, RawCompleter, RawHandler, Registrar};
use crate::tree::filter_matching_start;

pub const UNKNOWN_COMMAND: &str = "&cUnknown command. Type \"help\" for help.";

struct Binding {
    name: String,
    handler: RawHandler,
    completer: Option<RawCompleter>,
}

/// Name table + line splitting.
#[derive(Default)]
pub struct Shell {
    bindings: Vec<Binding>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered raw names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }

    fn find(&self, name: &str) -> Option<&Binding> {
        let name = name.to_lowercase();
        self.bindings.iter().find(|b| b.name.to_lowercase() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Binding> {
        let name = name.to_lowercase();
        self.bindings.iter_mut().find(|b| b.name.to_lowercase() == name)
    }

    /// Run one input line. Blank lines are ignored.
    pub fn execute_line(&self, line: &str, out: &dyn Output) -> Result<()> {
        let tokens = split_line(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };
        self.execute(name, args, out)
    }

    /// Run a raw command by name with already-split arguments.
    pub fn execute(&self, name: &str, args: &[String], out: &dyn Output) -> Result<()> {
        match self.find(name) {
            Some(binding) => {
                tracing::debug!(name, args = args.len(), "execute");
                (binding.handler)(args, out)
                    .with_context(|| format!("Command '{}' failed", binding.name))
            }
            None => {
                tracing::warn!(name, "unknown command");
                out.line(UNKNOWN_COMMAND);
                Ok(())
            }
        }
    }

    /// Completion candidates for the token being typed at the end of `line`.
    pub fn complete_line(&self, line: &str) -> Result<Vec<String>> {
        let mut tokens = split_line(line)?;
        if line.is_empty() || line.ends_with(char::is_whitespace) {
            tokens.push(String::new());
        }

        let Some((name, args)) = tokens.split_first() else {
            return Ok(Vec::new());
        };

        if args.is_empty() {
            let names = self.bindings.iter().map(|b| b.name.clone());
            return Ok(filter_matching_start(name, names));
        }

        Ok(self.complete(name, args))
    }

    /// Ask the completer registered for `name`; empty when there is none.
    pub fn complete(&self, name: &str, args: &[String]) -> Vec<String> {
        self.find(name)
            .and_then(|b| b.completer.as_ref())
            .map(|c| c(args))
            .unwrap_or_default()
    }
}

impl Registrar for Shell {
    fn register_command(&mut self, name: &str, handler: RawHandler) {
        if let Some(existing) = self.find_mut(name) {
            tracing::debug!(name, "replacing command binding");
            existing.handler = handler;
            existing.completer = None;
            return;
        }
        self.bindings.push(Binding {
            name: name.to_string(),
            handler,
            completer: None,
        });
    }

    fn register_completion(&mut self, name: &str, completer: RawCompleter) {
        match self.find_mut(name) {
            Some(binding) => binding.completer = Some(completer),
            None => tracing::warn!(name, "completion registered for unknown command; ignored"),
        }
    }
}

fn split_line(line: &str) -> Result<Vec<String>> {
    shell_words::split(line).with_context(|| format!("Failed to split input: '{line}'"))
}
