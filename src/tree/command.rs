/*!
Compiled command model.

A [`Command`] is the only thing consumers of the tree ever handle. It is
produced by one of two public constructors:

  - [`Command::leaf`]        a plain handler (+ optional completion)
  - [`CommandHost::build`]   a compiled host (see `host.rs`)

plus the crate-private help node injected by the host compiler. All of them
expose the same surface: `name`, `aliases`, `description`, `dispatch`,
`params`.

[`CommandHost::build`]: crate::tree::host::CommandHost::build
*/

use std::fmt;

use anyhow::Result;

use crate::config::HelpConfig;
use crate::runtime::Output;
use crate::tree::context::Context;
use crate::tree::help;
use crate::tree::host::HostNode;

/// Handler invoked with the remaining arguments at its level.
pub type Handler = dyn Fn(&[String], &Context<'_>, &dyn Output) -> Result<()> + Send + Sync;

/// Completion function: candidates for the next token given the remaining arguments.
pub type Params = dyn Fn(&[String], &Context<'_>) -> Vec<String> + Send + Sync;

/// Short and long description shown by the help listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    pub short: Option<String>,
    pub full: Option<String>,
}

/// A bare handler with optional completion and no metadata.
///
/// Used for the default handler of a [`CommandHost`](crate::tree::host::CommandHost)
/// and as the body of leaf commands.
pub struct CommandImpl {
    handler: Box<Handler>,
    params: Option<Box<Params>>,
}

impl CommandImpl {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&[String], &Context<'_>, &dyn Output) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            params: None,
        }
    }

    pub fn with_params<P>(mut self, params: P) -> Self
    where
        P: Fn(&[String], &Context<'_>) -> Vec<String> + Send + Sync + 'static,
    {
        self.params = Some(Box::new(params));
        self
    }

    pub fn has_params(&self) -> bool {
        self.params.is_some()
    }

    pub fn call(&self, args: &[String], ctx: &Context<'_>, out: &dyn Output) -> Result<()> {
        (self.handler)(args, ctx, out)
    }

    /// Completion candidates, or `None` when no completion function is attached.
    pub fn complete(&self, args: &[String], ctx: &Context<'_>) -> Option<Vec<String>> {
        self.params.as_ref().map(|p| p(args, ctx))
    }
}

impl fmt::Debug for CommandImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandImpl")
            .field("params", &self.has_params())
            .finish_non_exhaustive()
    }
}

pub(crate) enum Body {
    Leaf(CommandImpl),
    Host(HostNode),
    Help(HelpConfig),
}

/// Compiled, immutable node of a command tree.
pub struct Command {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) description: Description,
    pub(crate) body: Body,
}

impl Command {
    /// Start declaring a leaf command.
    pub fn leaf<F>(name: impl Into<String>, handler: F) -> LeafBuilder
    where
        F: Fn(&[String], &Context<'_>, &dyn Output) -> Result<()> + Send + Sync + 'static,
    {
        LeafBuilder {
            name: name.into(),
            aliases: Vec::new(),
            description: Description::default(),
            imp: CommandImpl::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Name followed by every alias, in declaration order.
    pub fn invocable_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Case-insensitive match against the name or any alias.
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.invocable_names().any(|n| n.to_lowercase() == token)
    }

    /// Whether this command offers completion candidates at all.
    pub fn has_params(&self) -> bool {
        match &self.body {
            Body::Leaf(imp) => imp.has_params(),
            Body::Host(_) | Body::Help(_) => true,
        }
    }

    /// Whether this command was compiled from a [`CommandHost`](crate::tree::host::CommandHost).
    pub fn is_host(&self) -> bool {
        matches!(self.body, Body::Host(_))
    }

    /// Subcommands of a compiled host, in display order (empty for leaves).
    pub fn subcommands(&self) -> &[Command] {
        match &self.body {
            Body::Host(node) => node.subcommands(),
            Body::Leaf(_) | Body::Help(_) => &[],
        }
    }

    /// Run this command with `args` (already stripped of its own name).
    pub fn dispatch<'a>(&'a self, args: &[String], ctx: &Context<'a>, out: &dyn Output) -> Result<()> {
        match &self.body {
            Body::Leaf(imp) => imp.call(args, ctx, out),
            Body::Host(node) => node.dispatch(self, args, ctx, out),
            Body::Help(config) => help::run(config, args, ctx, out),
        }
    }

    /// Completion candidates for the next token; empty when the command has none.
    pub fn params<'a>(&'a self, args: &[String], ctx: &Context<'a>) -> Vec<String> {
        match &self.body {
            Body::Leaf(imp) => imp.complete(args, ctx).unwrap_or_default(),
            Body::Host(node) => node.complete(self, args, ctx),
            Body::Help(_) => help::complete(args, ctx),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.body {
            Body::Leaf(_) => "leaf",
            Body::Host(_) => "host",
            Body::Help(_) => "help",
        };
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("kind", &kind)
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`Command::leaf`].
pub struct LeafBuilder {
    name: String,
    aliases: Vec<String>,
    description: Description,
    imp: CommandImpl,
}

impl LeafBuilder {
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

    pub fn params<P>(mut self, params: P) -> Self
    where
        P: Fn(&[String], &Context<'_>) -> Vec<String> + Send + Sync + 'static,
    {
        self.imp = self.imp.with_params(params);
        self
    }

    pub fn build(self) -> Command {
        Command {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            body: Body::Leaf(self.imp),
        }
    }
}

impl From<LeafBuilder> for Command {
    fn from(builder: LeafBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RecordingOutput;

    #[test]
    fn leaf_metadata() {
        let cmd = Command::leaf("Ping", |_, _, _| Ok(()))
            .alias("p")
            .short("replies")
            .build();
        assert_eq!(cmd.name(), "Ping");
        assert_eq!(cmd.aliases(), &["p".to_string()]);
        assert_eq!(cmd.description().short.as_deref(), Some("replies"));
        assert!(cmd.description().full.is_none());
        assert!(!cmd.has_params());
        assert!(!cmd.is_host());
        assert!(cmd.subcommands().is_empty());
    }

    #[test]
    fn matches_ignores_case_on_both_sides() {
        let cmd = Command::leaf("Ping", |_, _, _| Ok(())).alias("P").build();
        assert!(cmd.matches("ping"));
        assert!(cmd.matches("PING"));
        assert!(cmd.matches("p"));
        assert!(!cmd.matches("pin"));
    }

    #[test]
    fn leaf_dispatch_receives_args_unchanged() {
        let cmd = Command::leaf("echo", |args, _, out| {
            out.line(&args.join("|"));
            Ok(())
        })
        .build();
        let out = RecordingOutput::new();
        let args = vec!["a".to_string(), "b".to_string()];
        cmd.dispatch(&args, &Context::new(&args), &out).unwrap();
        assert_eq!(out.lines(), vec!["a|b"]);
    }

    #[test]
    fn leaf_without_params_completes_to_nothing() {
        let cmd = Command::leaf("x", |_, _, _| Ok(())).build();
        assert!(cmd.params(&["a".to_string()], &Context::new(&[])).is_empty());
    }

    #[test]
    fn handler_errors_propagate() {
        let cmd = Command::leaf("fail", |_, _, _| anyhow::bail!("boom")).build();
        let err = cmd
            .dispatch(&[], &Context::new(&[]), &RecordingOutput::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
