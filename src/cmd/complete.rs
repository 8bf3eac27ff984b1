/*!
`complete.rs`

Implements `cmdtree complete <LINE>`: prints completion candidates for the
token being typed at the end of LINE (one per line, or JSON).

A trailing space matters: `"tree "` completes the first argument of `tree`,
`"tree"` completes the command name itself.

JSON Output Shape:
{
  "status": "ok",
  "line": "tree g",
  "count": 1,
  "candidates": ["greet"]
}
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOpts, build_shell};

/// CLI arguments for `cmdtree complete <LINE>`
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Partial input line (quote it to keep trailing spaces)
    #[arg(default_value = "")]
    pub line: String,

    /// Output JSON instead of one candidate per line
    #[arg(long)]
    pub json: bool,
}

/// Entry point for the complete subcommand.
pub fn execute_complete(args: CompleteArgs, opts: &GlobalOpts) -> Result<()> {
    let shell = build_shell(opts)?;
    let candidates = shell.complete_line(&args.line)?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "line": args.line,
                "count": candidates.len(),
                "candidates": candidates,
            })
        );
        return Ok(());
    }

    for c in candidates {
        println!("{c}");
    }
    Ok(())
}
