//! Demo command set used by the `cmdtree` binary.
//!
//! ```text
//! tree (t)
//!   ping (p)              -> pong
//!   echo <text...>        -> echoes text
//!   whereami              -> path + original args
//!   color (colour)
//!     list                -> palette
//!     show <name>         -> sample line in that colour
//!   greet [name]          (default handler, names complete)
//!     loud <name>
//!   help                  (generated)
//! version
//! ```

use std::sync::Arc;

use crate::runtime::{Registrar, register_command};
use crate::tree::{Command, CommandHost, CommandImpl, HostCompiler, param_option_list};

const PALETTE: &[(&str, &str)] = &[
    ("green", "&a"),
    ("aqua", "&b"),
    ("red", "&c"),
    ("purple", "&d"),
    ("yellow", "&e"),
    ("white", "&f"),
];

const FRIENDS: &[&str] = &["alice", "bob", "carol"];

pub fn build_tree(compiler: &HostCompiler) -> Command {
    let color = compiler.build(
        CommandHost::new("color")
            .alias("colour")
            .short("Colour palette tools")
            .subcommand(
                Command::leaf("list", |_, _, out| {
                    for (name, tag) in PALETTE {
                        out.line(&format!("{tag}{name}"));
                    }
                    Ok(())
                })
                .short("List palette entries"),
            )
            .subcommand(
                Command::leaf("show", |args, ctx, out| {
                    let Some(name) = args.first() else {
                        out.line(&format!("&cUsage: {} show <colour>", ctx.path()));
                        return Ok(());
                    };
                    match PALETTE.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
                        Some((n, tag)) => out.line(&format!("{tag}This is {n}.")),
                        None => out.line(&format!("&cUnknown colour: {name}")),
                    }
                    Ok(())
                })
                .short("Print a sample line")
                .full("Print a sample line in the given colour, e.g. `color show aqua`.")
                .params(param_option_list(PALETTE.iter().map(|(n, _)| *n))),
            ),
    );

    let greet = compiler.build(
        CommandHost::new("greet")
            .short("Say hello")
            .full("Say hello to someone; `greet loud <name>` shouts.")
            .default_handler(
                CommandImpl::new(|args, _, out| {
                    let who = args.first().map(String::as_str).unwrap_or("world");
                    out.line(&format!("&aHello, {who}!"));
                    Ok(())
                })
                .with_params(param_option_list(FRIENDS.iter().copied())),
            )
            .subcommand(
                Command::leaf("loud", |args, _, out| {
                    let who = args.first().map(String::as_str).unwrap_or("world");
                    out.line(&format!("&l&eHELLO, {}!", who.to_uppercase()));
                    Ok(())
                })
                .short("Shout hello")
                .params(param_option_list(FRIENDS.iter().copied())),
            ),
    );

    compiler.build(
        CommandHost::new("tree")
            .alias("t")
            .short("Demo command tree")
            .subcommand(
                Command::leaf("ping", |_, _, out| {
                    out.line("&apong");
                    Ok(())
                })
                .alias("p")
                .short("Replies with pong"),
            )
            .subcommand(
                Command::leaf("echo", |args, _, out| {
                    out.line(&args.join(" "));
                    Ok(())
                })
                .short("Echo the arguments"),
            )
            .subcommand(
                Command::leaf("whereami", |args, ctx, out| {
                    out.line(&format!("&bpath: &f{}", ctx.path()));
                    out.line(&format!("&binput: &f{}", ctx.original_args().join(" ")));
                    out.line(&format!("&bremaining: &f{}", args.join(" ")));
                    Ok(())
                })
                .short("Show the resolved command path"),
            )
            .subcommand(color)
            .subcommand(greet),
    )
}

pub fn version_command() -> Command {
    Command::leaf("version", |_, _, out| {
        out.line(&format!("&a{} &f{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
        Ok(())
    })
    .short("Print the version")
    .build()
}

/// Compile the demo set and register it.
pub fn install(compiler: &HostCompiler, registrar: &mut impl Registrar) {
    register_command(Arc::new(build_tree(compiler)), registrar);
    register_command(Arc::new(version_command()), registrar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelpOverrides;
    use crate::runtime::RecordingOutput;
    use crate::shell::Shell;

    fn shell() -> Shell {
        let mut sh = Shell::new();
        install(&HostCompiler::default(), &mut sh);
        sh
    }

    fn run(sh: &Shell, line: &str) -> Vec<String> {
        let out = RecordingOutput::new();
        sh.execute_line(line, &out).unwrap();
        out.lines()
    }

    #[test]
    fn registered_names() {
        assert_eq!(shell().names(), vec!["tree", "t", "version"]);
    }

    #[test]
    fn ping_and_alias() {
        let sh = shell();
        assert_eq!(run(&sh, "tree ping"), vec!["&apong"]);
        assert_eq!(run(&sh, "t p"), vec!["&apong"]);
    }

    #[test]
    fn whereami_reports_nested_path() {
        assert_eq!(
            run(&shell(), "t whereami a b"),
            vec!["&bpath: &f/tree", "&binput: &fwhereami a b", "&bremaining: &fa b"]
        );
    }

    #[test]
    fn greet_default_and_loud() {
        let sh = shell();
        assert_eq!(run(&sh, "tree greet"), vec!["&aHello, world!"]);
        assert_eq!(run(&sh, "tree greet bob"), vec!["&aHello, bob!"]);
        assert_eq!(run(&sh, "tree greet loud bob"), vec!["&l&eHELLO, BOB!"]);
    }

    #[test]
    fn color_show_and_usage() {
        let sh = shell();
        assert_eq!(run(&sh, "tree colour show AQUA"), vec!["&bThis is aqua."]);
        assert_eq!(run(&sh, "tree color show"), vec!["&cUsage: /tree color show <colour>"]);
        assert_eq!(run(&sh, "tree color list").len(), PALETTE.len());
    }

    #[test]
    fn completion_through_the_tree() {
        let sh = shell();
        assert_eq!(sh.complete_line("tree g").unwrap(), vec!["greet"]);
        assert_eq!(sh.complete_line("tree greet ").unwrap(), vec![
            "alice", "bob", "carol", "loud", "help"
        ]);
        assert_eq!(sh.complete_line("tree greet loud c").unwrap(), vec!["carol"]);
        assert_eq!(sh.complete_line("tree color show a").unwrap(), vec!["aqua"]);
        assert_eq!(sh.complete_line("tree help w").unwrap(), vec!["whereami"]);
    }

    #[test]
    fn help_listing_for_nested_host() {
        let lines = run(&shell(), "tree color");
        assert_eq!(lines[0], "&a--- &b/tree color commands &a---");
        assert_eq!(lines.len(), 4, "header + list + show + help");
    }

    #[test]
    fn disabling_help_yields_warning() {
        let mut sh = Shell::new();
        install(&HostCompiler::new(&HelpOverrides::default().without_help()), &mut sh);
        let lines = run(&sh, "tree color nope");
        assert_eq!(
            lines,
            vec!["&cInvalid subcommand, &acommands are: &blist&a, &bshow"]
        );
    }
}
