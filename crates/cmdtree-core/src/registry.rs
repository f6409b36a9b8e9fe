//! Registry boundary
//!
//! A root command becomes reachable only after the host has put it into its
//! own command table. The engine never reaches into that table; the host
//! exposes a `CommandRegistry` and receives a `Registration` per root.
//!
//! `InMemoryRegistry` is a complete host-side table for hosts without one of
//! their own (and for tests).

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use crate::errors::RegistryError;
use crate::handler::{CommandIdentity, Invocation};
use crate::model::alias::normalize;
use crate::model::CommandNode;
use crate::sender::CommandSender;
use crate::{log_op_end, log_op_start};

const OP_DISPATCH: &str = "dispatch";
const OP_REGISTER: &str = "register_command";

/// Everything a host needs to expose one root command
///
/// `execute` is the dispatch shim: the host routes raw invocations into it.
#[derive(Debug)]
pub struct Registration {
    identity: CommandIdentity,
    node: Arc<CommandNode>,
}

impl Registration {
    pub(crate) fn new(node: Arc<CommandNode>) -> Self {
        let identity = CommandIdentity::new(node.namespace(), node.label().unwrap_or_default());
        Self { identity, node }
    }

    pub fn identity(&self) -> &CommandIdentity {
        &self.identity
    }

    pub fn namespace(&self) -> &str {
        &self.identity.namespace
    }

    pub fn label(&self) -> &str {
        &self.identity.label
    }

    pub fn aliases(&self) -> &[String] {
        self.node.aliases()
    }

    pub fn description(&self) -> &str {
        self.node.description()
    }

    pub fn usage(&self) -> &str {
        self.node.usage()
    }

    pub fn node(&self) -> &Arc<CommandNode> {
        &self.node
    }

    /// Dispatch a raw invocation into the registered node
    ///
    /// `label` is the word the sender typed; it may be an alias or a
    /// namespaced form, and it is what usage messages substitute.
    pub fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[&str]) -> bool {
        let start = Instant::now();
        let invocation = Invocation::new(sender, &self.identity, label, args);
        log_op_start!(
            OP_DISPATCH,
            invocation_id = %invocation.id,
            command = %self.identity,
            label = label,
            sender = sender.name(),
            args_len = args.len()
        );

        let handled = self.node.dispatch(&invocation);

        log_op_end!(
            OP_DISPATCH,
            duration_ms = start.elapsed().as_millis() as u64,
            invocation_id = %invocation.id,
            label = label,
            handled = handled
        );
        handled
    }
}

/// Host command table
///
/// Called once per root command, from `CommandBuilder::build`. A refusal is
/// fatal for that build and is never retried.
pub trait CommandRegistry {
    /// Take ownership of a finished root command
    ///
    /// # Errors
    ///
    /// Host-defined; `RegistryError::Duplicate` for name collisions.
    fn register(&self, registration: Registration) -> Result<(), RegistryError>;
}

/// Registry that accepts and discards every registration
///
/// Useful where only subcommands are built, or where the caller dispatches
/// through the returned node directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRegistry;

impl CommandRegistry for NoopRegistry {
    fn register(&self, _registration: Registration) -> Result<(), RegistryError> {
        Ok(())
    }
}

#[derive(Default)]
struct Table {
    registrations: Vec<Arc<Registration>>,
    /// Case-folded qualified names claimed so far
    qualified: HashSet<String>,
    /// Case-folded lookup key -> index into `registrations`
    index: HashMap<String, usize>,
}

/// In-memory command table
///
/// Every command is indexed under `namespace:label`, which must be unique.
/// The bare label and each alias are indexed as well, first registration
/// winning, so a later command with a clashing short name stays reachable
/// through its qualified name. A qualified name always beats a short name:
/// a root without a namespace, whose qualified name is its bare label,
/// takes that key over from an earlier command's alias. Lookup ignores case.
#[derive(Default)]
pub struct InMemoryRegistry {
    table: Mutex<Table>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registration by qualified name, label or alias
    pub fn get(&self, label: &str) -> Option<Arc<Registration>> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table
            .index
            .get(&normalize(label))
            .map(|&idx| table.registrations[idx].clone())
    }

    /// Route a raw invocation to the command registered under `label`
    ///
    /// Returns `None` when no command answers to `label`, otherwise the
    /// command's completion signal.
    pub fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[&str]) -> Option<bool> {
        let registration = self.get(label)?;
        Some(registration.execute(sender, label, args))
    }

    /// Qualified names of all registered commands, in registration order
    pub fn qualified_names(&self) -> Vec<String> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table
            .registrations
            .iter()
            .map(|r| r.identity().qualified_name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .registrations
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommandRegistry for InMemoryRegistry {
    fn register(&self, registration: Registration) -> Result<(), RegistryError> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);

        let qualified_name = registration.identity().qualified_name();
        let qualified_key = normalize(&qualified_name);
        if table.qualified.contains(&qualified_key) {
            return Err(RegistryError::Duplicate { qualified_name });
        }

        let idx = table.registrations.len();
        let short_keys: Vec<String> = std::iter::once(registration.label())
            .chain(registration.aliases().iter().map(String::as_str))
            .map(normalize)
            .collect();

        table.qualified.insert(qualified_key.clone());
        table.index.insert(qualified_key, idx);
        for key in short_keys {
            table.index.entry(key).or_insert(idx);
        }

        tracing::info!(
            component = module_path!(),
            op = OP_REGISTER,
            label = registration.label(),
            qualified_name = %qualified_name,
            "registered command"
        );
        table.registrations.push(Arc::new(registration));
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRegistry")
            .field("commands", &self.qualified_names())
            .finish()
    }
}
