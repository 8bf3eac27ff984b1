/*!
`run.rs`

Implements `cmdtree run <LINE>...`: executes one line against the demo shell.

The words are joined back with spaces and re-split by the shell, so both
forms work:
  cmdtree run tree ping
  cmdtree run "tree echo 'two words'"
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::shared::{GlobalOpts, build_shell, stdout_output};

/// CLI arguments for `cmdtree run <LINE>...`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command line to execute (e.g. `tree ping`)
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

/// Entry point for the run subcommand.
pub fn execute_run(args: RunArgs, opts: &GlobalOpts) -> Result<()> {
    let shell = build_shell(opts)?;
    let out = stdout_output(opts);
    shell.execute_line(&args.line.join(" "), &out)
}
