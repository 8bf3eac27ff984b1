/*!
Binary subcommands.

  src/cmd/
    mod.rs       (this file)
    shared.rs    (global options -> configured Shell)
    run.rs       (RunArgs      + execute_run)
    complete.rs  (CompleteArgs + execute_complete)
    repl.rs      (ReplArgs     + execute_repl)

Conventions:
  - Each subcommand module exposes exactly one public `execute_*` function
    that returns `anyhow::Result<()>`.
  - Argument structs derive `clap::Args` and are kept minimal.
*/

pub mod complete;
pub mod repl;
pub mod run;
pub mod shared;

pub use complete::{CompleteArgs, execute_complete};
pub use repl::{ReplArgs, execute_repl};
pub use run::{RunArgs, execute_run};
