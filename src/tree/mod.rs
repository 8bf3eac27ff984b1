/*!
Command tree: model, resolution and the host compiler.

Layout:
  src/tree/
    mod.rs       (this file, re-exports)
    context.rs   (Context: original args + traversed path)
    command.rs   (Command, CommandImpl, leaf builder)
    resolve.rs   (name lookup, name flattening, prefix filter)
    host.rs      (CommandHost -> Command: dispatch + completion)
    help.rs      (generated `help` subcommand)

Conventions:
  - A compiled `Command` is immutable; hosts own their subcommands by value.
  - Dispatch consumes one token per matched level.
  - Completion never writes output.
*/

pub mod command;
pub mod context;
mod help;
pub mod host;
pub mod resolve;

pub use command::{Command, CommandImpl, Description, LeafBuilder};
pub use context::Context;
pub use host::{CommandHost, HostCompiler, build_command_host};
pub use resolve::{command_names, filter_matching_start, find_command, param_option_list};
