//! cmdtree - nested, aliasable command trees.
//!
//! Declare a tree with [`CommandHost`] and [`Command::leaf`], compile it, then
//! hand it to a host runtime through [`register_command`]:
//!
//! ```
//! use std::sync::Arc;
//! use cmdtree::{Command, CommandHost, RecordingOutput, Shell, register_command};
//!
//! let root = CommandHost::new("root")
//!     .subcommand(
//!         Command::leaf("ping", |_, _, out| {
//!             out.line("pong");
//!             Ok(())
//!         })
//!         .alias("p"),
//!     )
//!     .build();
//!
//! let mut shell = Shell::new();
//! register_command(Arc::new(root), &mut shell);
//!
//! let out = RecordingOutput::new();
//! shell.execute_line("root p", &out).unwrap();
//! assert_eq!(out.lines(), vec!["pong"]);
//! assert_eq!(shell.complete_line("root ").unwrap(), vec!["ping", "p", "help"]);
//! ```

pub mod config;
pub mod demo;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod tree;
pub mod utils;

pub use config::{HelpConfig, HelpOverrides};
pub use runtime::{Output, RawCompleter, RawHandler, RecordingOutput, Registrar, StdoutOutput, register_command};
pub use shell::Shell;
pub use tree::{
    Command, CommandHost, CommandImpl, Context, Description, HostCompiler, build_command_host,
    command_names, filter_matching_start, find_command, param_option_list,
};
