/*!
Host compiler.

Turns a [`CommandHost`] declaration into one compiled [`Command`] whose
dispatch routes on the first token and whose completion delegates down the
matched subtree.

Dispatch order for a compiled host:
  1. first token matches a subcommand (name or alias, any case)
       -> that subcommand, with the token consumed
  2. a default handler exists
       -> default handler, with the args untouched
  3. a `help` subcommand exists
       -> help with no args (the general listing)
  4. otherwise
       -> one warning line listing the subcommand names

Every step receives a context with the host pushed onto the path.
*/

use anyhow::Result;

use crate::config::{HelpConfig, HelpOverrides};
use crate::runtime::Output;
use crate::tree::command::{Body, Command, CommandImpl, Description};
use crate::tree::context::Context;
use crate::tree::help;
use crate::tree::resolve::{command_names, filter_matching_start, find_command};

/// Author-facing declaration of a node with subcommands.
///
/// Consumed by [`CommandHost::build`]; compiling the same declaration twice is
/// not possible.
pub struct CommandHost {
    name: String,
    aliases: Vec<String>,
    description: Description,
    default: Option<CommandImpl>,
    subcommands: Vec<Command>,
}

impl CommandHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: Description::default(),
            default: None,
            subcommands: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn short(mut self, text: impl Into<String>) -> Self {
        self.description.short = Some(text.into());
        self
    }

    pub fn full(mut self, text: impl Into<String>) -> Self {
        self.description.full = Some(text.into());
        self
    }

    /// Handler used when the first token names no subcommand.
    pub fn default_handler(mut self, imp: CommandImpl) -> Self {
        self.default = Some(imp);
        self
    }

    pub fn subcommand(mut self, command: impl Into<Command>) -> Self {
        self.subcommands.push(command.into());
        self
    }

    /// Compile with the default [`HelpConfig`].
    pub fn build(self) -> Command {
        build_command_host(self, &HelpOverrides::default())
    }

    /// Compile with an explicit, already-resolved config.
    pub fn build_with(self, config: &HelpConfig) -> Command {
        let CommandHost {
            name,
            aliases,
            description,
            default,
            mut subcommands,
        } = self;

        if config.inject_help {
            if find_command(help::HELP_NAME, &subcommands).is_some() {
                tracing::debug!(host = %name, "host already declares help; not injecting");
            } else {
                subcommands.push(help::help_command(config.clone()));
            }
        }

        tracing::debug!(
            host = %name,
            subcommands = subcommands.len(),
            has_default = default.is_some(),
            "compiled command host"
        );

        Command {
            name,
            aliases,
            description,
            body: Body::Host(HostNode {
                default,
                subcommands,
                config: config.clone(),
            }),
        }
    }
}

/// Compile `host`, resolving `overrides` over the default config.
pub fn build_command_host(host: CommandHost, overrides: &HelpOverrides) -> Command {
    host.build_with(&HelpConfig::merged(overrides))
}

/// Compiles many hosts with one captured config.
#[derive(Clone, Debug, Default)]
pub struct HostCompiler {
    config: HelpConfig,
}

impl HostCompiler {
    pub fn new(overrides: &HelpOverrides) -> Self {
        Self {
            config: HelpConfig::merged(overrides),
        }
    }

    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    pub fn build(&self, host: CommandHost) -> Command {
        host.build_with(&self.config)
    }
}

/// Body of a compiled host.
pub(crate) struct HostNode {
    default: Option<CommandImpl>,
    subcommands: Vec<Command>,
    config: HelpConfig,
}

impl HostNode {
    pub(crate) fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub(crate) fn dispatch<'a>(
        &'a self,
        this: &'a Command,
        args: &[String],
        ctx: &Context<'a>,
        out: &dyn Output,
    ) -> Result<()> {
        let ctx = ctx.descend(this);
        let first = args.first().map(|s| s.to_lowercase()).unwrap_or_default();

        if let Some(target) = find_command(&first, &self.subcommands) {
            tracing::debug!(path = %ctx.path(), command = target.name(), "dispatch");
            let rest = args.get(1..).unwrap_or(&[]);
            return target.dispatch(rest, &ctx, out);
        }

        if let Some(default) = &self.default {
            tracing::debug!(path = %ctx.path(), "dispatch to default handler");
            return default.call(args, &ctx, out);
        }

        if let Some(help) = find_command(help::HELP_NAME, &self.subcommands) {
            tracing::debug!(path = %ctx.path(), token = %first, "no match; showing help");
            return help.dispatch(&[], &ctx, out);
        }

        let c = &self.config;
        let names: Vec<&str> = self.subcommands.iter().map(Command::name).collect();
        let joined = names.join(&format!("{}, {}", c.color_main, c.color_accent));
        out.line(&format!(
            "{}Invalid subcommand, {}commands are: {}{}",
            c.color_warn, c.color_main, c.color_accent, joined
        ));
        Ok(())
    }

    pub(crate) fn complete<'a>(
        &'a self,
        this: &'a Command,
        args: &[String],
        ctx: &Context<'a>,
    ) -> Vec<String> {
        let ctx = ctx.descend(this);

        if args.len() < 2 {
            let partial = args.first().map(String::as_str).unwrap_or("");
            let from_default = self
                .default
                .as_ref()
                .and_then(|d| d.complete(args, &ctx))
                .unwrap_or_default();
            let names = command_names(&self.subcommands).into_iter().map(str::to_string);
            return filter_matching_start(partial, from_default.into_iter().chain(names));
        }

        match find_command(&args[0], &self.subcommands) {
            Some(sub) => sub.params(&args[1..], &ctx),
            None => Vec::new(),
        }
    }
}
