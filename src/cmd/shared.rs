/*!
shared.rs - helpers shared by run / complete / repl.

Turns the global CLI options into a ready `Shell` with the demo command set
registered, plus the stdout sink matching the chosen style.
*/

use std::path::{Path, PathBuf};

use anyhow::Result;

use cmdtree::render::StyleOptions;
use cmdtree::{HelpOverrides, HostCompiler, Shell, StdoutOutput, demo};

/// Options every subcommand needs.
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub no_help: bool,
    pub plain: bool,
}

pub fn load_overrides(config: Option<&Path>, no_help: bool) -> Result<HelpOverrides> {
    let overrides = match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading help config");
            HelpOverrides::from_yaml_file(path)?
        }
        None => HelpOverrides::default(),
    };
    Ok(if no_help {
        overrides.without_help()
    } else {
        overrides
    })
}

pub fn build_shell(opts: &GlobalOpts) -> Result<Shell> {
    let overrides = load_overrides(opts.config.as_deref(), opts.no_help)?;
    let compiler = HostCompiler::new(&overrides);
    let mut shell = Shell::new();
    demo::install(&compiler, &mut shell);
    tracing::debug!(names = ?shell.names(), "shell ready");
    Ok(shell)
}

pub fn stdout_output(opts: &GlobalOpts) -> StdoutOutput {
    let style = if opts.plain {
        StyleOptions::plain()
    } else {
        StyleOptions::detect()
    };
    StdoutOutput::new(style)
}
