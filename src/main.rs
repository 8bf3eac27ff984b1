use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;

use cmd::shared::GlobalOpts;
use cmd::{CompleteArgs, ReplArgs, RunArgs};
use cmdtree::utils;

/// cmdtree - nested command trees with recursive dispatch and tab-completion
///
/// Command layout:
///   cmdtree run <LINE>...         execute one line against the demo tree
///   cmdtree complete "<LINE>"     print completion candidates
///   cmdtree repl                  interactive loop (default)
///
/// Global flags / env:
///   -v / -vv        Increase verbosity
///   -q / --quiet    Errors only
///   -c / --config   YAML help config (or CMDTREE_CONFIG env)
///   --no-help       Do not inject `help` subcommands
///   --plain         Strip colour tags (also: NO_COLOR env)
///
/// Examples:
///   cmdtree run tree ping
///   cmdtree run tree help greet
///   cmdtree complete "tree greet "
///   echo "?tree co" | cmdtree repl --no-prompt
#[derive(Parser, Debug)]
#[command(
    name = "cmdtree",
    version,
    author,
    about = "cmdtree - nested command trees with recursive dispatch and tab-completion",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Help config file (YAML)
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not inject generated `help` subcommands
    #[arg(long, global = true)]
    no_help: bool,

    /// Print without colours
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute one command line
    Run(RunArgs),

    /// Print completion candidates for a partial line
    Complete(CompleteArgs),

    /// Read command lines from stdin
    Repl(ReplArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    // Determine effective config path (CLI flag > CMDTREE_CONFIG env)
    let config = cli.config.clone().or_else(|| {
        std::env::var("CMDTREE_CONFIG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    });

    let opts = GlobalOpts {
        config,
        no_help: cli.no_help,
        plain: cli.plain,
    };

    match cli.command {
        Some(Commands::Run(args)) => cmd::execute_run(args, &opts),
        Some(Commands::Complete(args)) => cmd::execute_complete(args, &opts),
        Some(Commands::Repl(args)) => cmd::execute_repl(args, &opts),
        None => cmd::execute_repl(ReplArgs::default(), &opts),
    }
}
