//! Per-invocation state threaded through dispatch and completion.

use crate::tree::command::Command;

/// Snapshot of one invocation: the raw arguments the runtime received and the
/// path of commands resolved so far.
///
/// A `Context` is never mutated on the way down. Every host node calls
/// [`Context::descend`], which hands back a copy with the node appended, so two
/// siblings resolved from the same parent cannot see each other's path.
#[derive(Clone, Debug)]
pub struct Context<'a> {
    original_args: Vec<String>,
    prev_commands: Vec<&'a Command>,
}

impl<'a> Context<'a> {
    /// Fresh top-level context (empty path).
    pub fn new(original_args: &[String]) -> Self {
        Self {
            original_args: original_args.to_vec(),
            prev_commands: Vec::new(),
        }
    }

    /// Arguments exactly as the runtime delivered them to the top-level command.
    pub fn original_args(&self) -> &[String] {
        &self.original_args
    }

    /// Commands traversed from the root down to (not including) the one resolving.
    pub fn prev_commands(&self) -> &[&'a Command] {
        &self.prev_commands
    }

    /// Copy of this context with `command` pushed onto the path.
    pub fn descend(&self, command: &'a Command) -> Self {
        let mut next = self.clone();
        next.prev_commands.push(command);
        next
    }

    /// Slash-prefixed path of traversed names, e.g. `/tree color`.
    pub fn path(&self) -> String {
        let names: Vec<&str> = self.prev_commands.iter().map(|c| c.name()).collect();
        format!("/{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::command::Command;

    fn noop(name: &str) -> Command {
        Command::leaf(name, |_, _, _| Ok(())).build()
    }

    #[test]
    fn fresh_context_has_empty_path() {
        let args = vec!["a".to_string(), "b".to_string()];
        let ctx = Context::new(&args);
        assert_eq!(ctx.original_args(), &args[..]);
        assert!(ctx.prev_commands().is_empty());
        assert_eq!(ctx.path(), "/");
    }

    #[test]
    fn descend_does_not_touch_parent() {
        let root = noop("root");
        let left = noop("left");
        let right = noop("right");

        let base = Context::new(&[]);
        let at_root = base.descend(&root);
        let l = at_root.descend(&left);
        let r = at_root.descend(&right);

        assert!(base.prev_commands().is_empty(), "base untouched");
        assert_eq!(at_root.path(), "/root");
        assert_eq!(l.path(), "/root left");
        assert_eq!(r.path(), "/root right", "siblings see only their own path");
    }
}
