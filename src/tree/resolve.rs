//! Name resolution and completion-candidate helpers.

use crate::tree::command::Command;
use crate::tree::context::Context;

/// First command in `commands` whose name or alias equals `token`, ignoring case.
///
/// Duplicate names are an authoring mistake; list order decides silently.
pub fn find_command<'a>(token: &str, commands: &'a [Command]) -> Option<&'a Command> {
    let found = commands.iter().find(|c| c.matches(token));
    tracing::trace!(token, found = found.map(Command::name), "resolve");
    found
}

/// Every invocable token of `commands`: each name followed by its aliases.
pub fn command_names(commands: &[Command]) -> Vec<&str> {
    commands.iter().flat_map(Command::invocable_names).collect()
}

/// Keep the candidates that start with `partial` (case-sensitive).
pub fn filter_matching_start<I, S>(partial: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    candidates
        .into_iter()
        .map(Into::into)
        .filter(|c| c.starts_with(partial))
        .collect()
}

/// Completion function offering a fixed list of options for the first argument.
pub fn param_option_list<I, S>(
    options: I,
) -> impl Fn(&[String], &Context<'_>) -> Vec<String> + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    option_list(options.into_iter().map(Into::into).collect())
}

fn option_list(
    options: Vec<String>,
) -> impl Fn(&[String], &Context<'_>) -> Vec<String> + Send + Sync + 'static {
    move |args: &[String], _ctx: &Context<'_>| {
        let partial = args.first().map(String::as_str).unwrap_or("");
        filter_matching_start(partial, options.iter().cloned())
    }
}
