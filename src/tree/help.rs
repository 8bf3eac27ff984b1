//! Generated `help` subcommand.

use anyhow::Result;

use crate::config::HelpConfig;
use crate::runtime::Output;
use crate::tree::command::{Body, Command, Description};
use crate::tree::context::Context;
use crate::tree::resolve::{command_names, filter_matching_start, find_command};

pub(crate) const HELP_NAME: &str = "help";
const NO_INFO: &str = "No info";

pub(crate) fn help_command(config: HelpConfig) -> Command {
    Command {
        name: HELP_NAME.to_string(),
        aliases: Vec::new(),
        description: Description {
            short: Some("Show this list".to_string()),
            full: Some("Get information about a command or a general list of commands.".to_string()),
        },
        body: Body::Help(config),
    }
}

/// Subcommands of the host this node was resolved from: the last entry of
/// the path. Empty when called outside any host.
fn siblings<'a>(ctx: &Context<'a>) -> &'a [Command] {
    ctx.prev_commands()
        .last()
        .copied()
        .map(Command::subcommands)
        .unwrap_or(&[])
}

pub(crate) fn run(
    config: &HelpConfig,
    args: &[String],
    ctx: &Context<'_>,
    out: &dyn Output,
) -> Result<()> {
    let siblings = siblings(ctx);
    let prefix = ctx.path();
    let (main, accent) = (&config.color_main, &config.color_accent);

    match args.first() {
        Some(first) => match find_command(first, siblings) {
            Some(target) => {
                let d = &target.description;
                let info = d.full.as_deref().or(d.short.as_deref()).unwrap_or(NO_INFO);
                out.line(&format!("{accent}{prefix} {} {main}- {info}", target.name));
            }
            None => out.line(&format!(
                "{main}I can't help you with a command I don't recognize!"
            )),
        },
        None => {
            out.line(&format!("{main}--- {accent}{prefix} commands {main}---"));
            for command in siblings {
                let info = command.description.short.as_deref().unwrap_or(NO_INFO);
                out.line(&format!("{accent}{prefix} {} {main}- {info}", command.name));
            }
        }
    }
    Ok(())
}

pub(crate) fn complete(args: &[String], ctx: &Context<'_>) -> Vec<String> {
    let partial = args.first().map(String::as_str).unwrap_or("");
    filter_matching_start(partial, command_names(siblings(ctx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RecordingOutput;
    use crate::tree::host::CommandHost;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    fn root() -> Command {
        CommandHost::new("root")
            .subcommand(Command::leaf("a", |_, _, _| Ok(())).alias("al").short("first"))
            .subcommand(Command::leaf("b", |_, _, _| Ok(())).short("s").full("f"))
            .subcommand(Command::leaf("c", |_, _, _| Ok(())).full("only full"))
            .build()
    }

    fn help_of(root: &Command) -> &Command {
        root.subcommands()
            .iter()
            .find(|c| c.name() == HELP_NAME)
            .unwrap()
    }

    #[test]
    fn listing_uses_path_and_short_descriptions() {
        let root = root();
        let ctx = Context::new(&[]).descend(&root);
        let out = RecordingOutput::new();
        help_of(&root).dispatch(&[], &ctx, &out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "&a--- &b/root commands &a---",
                "&b/root a &a- first",
                "&b/root b &a- s",
                "&b/root c &a- No info",
                "&b/root help &a- Show this list",
            ],
            "listing shows short descriptions only"
        );
    }

    #[test]
    fn detail_prefers_full_then_short() {
        let root = root();
        let ctx = Context::new(&[]).descend(&root);
        let out = RecordingOutput::new();
        for name in ["A", "b", "c", "zz"] {
            help_of(&root).dispatch(&s(&[name]), &ctx, &out).unwrap();
        }
        assert_eq!(
            out.lines(),
            vec![
                "&b/root a &a- first",
                "&b/root b &a- f",
                "&b/root c &a- only full",
                "&aI can't help you with a command I don't recognize!",
            ]
        );
    }

    #[test]
    fn direct_dispatch_matches_host_routed_help() {
        let root = root();
        let args = s(&["help"]);
        let routed = RecordingOutput::new();
        root.dispatch(&args, &Context::new(&args), &routed).unwrap();

        let direct = RecordingOutput::new();
        let ctx = Context::new(&args).descend(&root);
        root.subcommands()[3].dispatch(&[], &ctx, &direct).unwrap();
        assert_eq!(direct.lines(), routed.lines());
        assert_eq!(direct.lines().len(), 5);
    }

    #[test]
    fn help_reached_through_subcommands_sees_its_host() {
        let root = CommandHost::new("root")
            .subcommand(Command::leaf("ping", |_, _, _| Ok(())).alias("p"))
            .build();
        let help = &root.subcommands()[1];
        let ctx = Context::new(&[]).descend(&root);
        let out = RecordingOutput::new();
        help.dispatch(&[], &ctx, &out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "&a--- &b/root commands &a---",
                "&b/root ping &a- No info",
                "&b/root help &a- Show this list",
            ]
        );
        assert_eq!(help.params(&[], &ctx), vec!["ping", "p", "help"]);
    }

    #[test]
    fn completion_covers_all_sibling_names() {
        let root = root();
        let ctx = Context::new(&[]).descend(&root);
        let help = help_of(&root);
        assert_eq!(help.params(&[], &ctx), vec!["a", "al", "b", "c", "help"]);
        assert_eq!(help.params(&s(&["a"]), &ctx), vec!["a", "al"]);
        assert_eq!(
            help.params(&s(&["h"]), &ctx),
            root.params(&s(&["help", "h"]), &Context::new(&[])),
            "direct and routed completion agree"
        );
    }

    #[test]
    fn outside_any_host_lists_nothing() {
        let root = root();
        let out = RecordingOutput::new();
        help_of(&root).dispatch(&[], &Context::new(&[]), &out).unwrap();
        assert_eq!(out.lines(), vec!["&a--- &b/ commands &a---"]);
        assert!(help_of(&root).params(&[], &Context::new(&[])).is_empty());
    }
}
