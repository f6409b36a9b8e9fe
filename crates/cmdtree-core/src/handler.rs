//! Handler capability and invocation context
//!
//! Every terminal action, and every command node, is reached through one call
//! shape: `CommandHandler::handle(&Invocation) -> bool`.

use std::fmt;
use std::sync::Arc;

use cmdtree_core_types::InvocationId;

use crate::sender::CommandSender;

/// Identity of the registered root command an invocation entered through
///
/// Subcommand handlers receive the identity of the root they were reached
/// from, not one of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandIdentity {
    pub namespace: String,
    pub label: String,
}

impl CommandIdentity {
    pub fn new(namespace: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            label: label.into(),
        }
    }

    /// `namespace:label`, or the bare label when the namespace is empty
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.label.clone()
        } else {
            format!("{}:{}", self.namespace, self.label)
        }
    }
}

impl fmt::Display for CommandIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// One unit of work passed down the dispatch chain
///
/// `label` is the word the sender actually typed (possibly an alias); `args`
/// are the tokens still unconsumed at the current depth. `depth` counts the
/// subcommand levels already descended (0 at the root).
#[derive(Clone)]
pub struct Invocation<'a> {
    pub id: InvocationId,
    pub sender: &'a dyn CommandSender,
    pub command: &'a CommandIdentity,
    pub label: &'a str,
    pub args: &'a [&'a str],
    pub depth: usize,
}

impl<'a> Invocation<'a> {
    /// Create an invocation with a fresh `InvocationId`
    pub fn new(
        sender: &'a dyn CommandSender,
        command: &'a CommandIdentity,
        label: &'a str,
        args: &'a [&'a str],
    ) -> Self {
        Self {
            id: InvocationId::new(),
            sender,
            command,
            label,
            args,
            depth: 0,
        }
    }

    /// The same invocation one level deeper, with its first argument consumed
    ///
    /// Order of the remaining arguments is preserved. An empty argument list
    /// stays empty.
    pub fn shifted(&self) -> Invocation<'a> {
        Invocation {
            args: self.args.get(1..).unwrap_or(&[]),
            depth: self.depth + 1,
            ..self.clone()
        }
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("id", &self.id)
            .field("sender", &self.sender.name())
            .field("command", &self.command)
            .field("label", &self.label)
            .field("args", &self.args)
            .field("depth", &self.depth)
            .finish()
    }
}

/// Handle an invocation and return a completion signal
///
/// `true` means the invocation was handled. What a host does with `false`
/// is its own business (a common choice is to show the usage line).
pub trait CommandHandler: Send + Sync {
    fn handle(&self, invocation: &Invocation<'_>) -> bool;
}

impl<T: CommandHandler + ?Sized> CommandHandler for Arc<T> {
    fn handle(&self, invocation: &Invocation<'_>) -> bool {
        (**self).handle(invocation)
    }
}

impl<T: CommandHandler + ?Sized> CommandHandler for Box<T> {
    fn handle(&self, invocation: &Invocation<'_>) -> bool {
        (**self).handle(invocation)
    }
}

/// Adapter turning a closure into a `CommandHandler`
pub struct FnHandler<F>(F);

impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&Invocation<'_>) -> bool + Send + Sync,
{
    fn handle(&self, invocation: &Invocation<'_>) -> bool {
        (self.0)(invocation)
    }
}

/// Wrap a closure as a `CommandHandler`
///
/// # Example
/// ```
/// use cmdtree_core::{handler_fn, CommandHandler, Invocation};
///
/// let handler = handler_fn(|inv: &Invocation<'_>| {
///     inv.sender.send_message("hello");
///     true
/// });
/// # let _ = &handler as &dyn CommandHandler;
/// ```
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&Invocation<'_>) -> bool + Send + Sync,
{
    FnHandler(f)
}

/// Extra sender check evaluated after the permission guard
pub type SenderPredicate = Arc<dyn Fn(&dyn CommandSender) -> bool + Send + Sync>;
