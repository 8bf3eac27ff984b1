/*!
`repl.rs`

Implements `cmdtree repl` (also the default when no subcommand is given).

Reads lines from stdin until EOF or `exit` / `quit`:
  tree ping        -> executed
  ?tree g          -> completion candidates for "tree g"
  ?                -> every registered name

A failing command prints its error and the loop continues.
*/

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use cmdtree::{Output, Shell};

use crate::cmd::shared::{GlobalOpts, build_shell, stdout_output};

/// CLI arguments for `cmdtree repl`
#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Do not print the `> ` prompt (useful when piping input)
    #[arg(long)]
    pub no_prompt: bool,
}

/// Entry point for the repl subcommand.
pub fn execute_repl(args: ReplArgs, opts: &GlobalOpts) -> Result<()> {
    let shell = build_shell(opts)?;
    let out = stdout_output(opts);
    let stdin = io::stdin();
    repl_loop(stdin.lock(), &shell, &out, !args.no_prompt)
}

fn repl_loop(reader: impl BufRead, shell: &Shell, out: &dyn Output, prompt: bool) -> Result<()> {
    let mut lines = reader.lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush().context("Failed to flush stdout")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim_start();

        if matches!(trimmed.trim_end(), "exit" | "quit") {
            break;
        }

        if let Some(partial) = trimmed.strip_prefix('?') {
            match shell.complete_line(partial) {
                Ok(candidates) => out.line(&candidates.join("  ")),
                Err(e) => out.line(&format!("&c{e:#}")),
            }
            continue;
        }

        if let Err(e) = shell.execute_line(trimmed, out) {
            tracing::debug!(error = %e, "command failed");
            out.line(&format!("&c{e:#}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree::RecordingOutput;
    use std::io::Cursor;

    fn session(input: &str) -> Vec<String> {
        let shell = build_shell(&GlobalOpts::default()).unwrap();
        let out = RecordingOutput::new();
        repl_loop(Cursor::new(input.to_string()), &shell, &out, false).unwrap();
        out.lines()
    }

    #[test]
    fn executes_and_completes() {
        let lines = session("tree ping\n?tree g\n\n");
        assert_eq!(lines, vec!["&apong", "greet"]);
    }

    #[test]
    fn stops_at_exit() {
        let lines = session("tree ping\nexit\ntree ping\n");
        assert_eq!(lines, vec!["&apong"]);
    }

    #[test]
    fn split_errors_do_not_end_the_session() {
        let lines = session("tree echo \"open\ntree p\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("&cFailed to split input"));
        assert_eq!(lines[1], "&apong");
    }
}
