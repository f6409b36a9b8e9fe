use std::fmt;
use std::sync::Arc;

use crate::builder::CommandBuilder;
use crate::handler::{CommandHandler, SenderPredicate};
use crate::settings::USAGE_PLACEHOLDER;

use super::alias::{normalize, AliasSet};
use super::descriptor::{ChildDescriptor, CommandDescriptor};

/// A child node together with the alias set that routes to it
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub aliases: AliasSet,
    pub node: Arc<CommandNode>,
}

/// CommandNode - one command or subcommand in a dispatch tree
///
/// Nodes are produced by `CommandBuilder::build` and never change afterwards:
/// there are no setters, and the child list is fixed at construction. A node
/// is shared (`Arc`) between its parent and, for roots, the host registry.
///
/// A root node carries a label, optional aliases and a namespace. A
/// subcommand carries none of those; it is reached only through the alias
/// set its parent stored it under.
pub struct CommandNode {
    pub(crate) label: Option<String>,
    pub(crate) description: String,
    pub(crate) usage: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) namespace: String,
    pub(crate) permission: Option<String>,
    pub(crate) permission_message: String,
    pub(crate) not_player_message: String,
    pub(crate) predicate: Option<SenderPredicate>,
    pub(crate) handler: Arc<dyn CommandHandler>,
    pub(crate) min_args: Option<usize>,
    pub(crate) max_args: Option<usize>,
    pub(crate) player_only: bool,
    pub(crate) subcommand: bool,
    pub(crate) children: Vec<ChildEntry>,
}

impl CommandNode {
    /// Start configuring a new node with default settings
    pub fn builder() -> CommandBuilder {
        CommandBuilder::new()
    }

    /// Find the first child whose alias set contains `token`, ignoring case
    ///
    /// This is a linear scan in insertion order. Sibling alias sets may
    /// overlap; the earliest child wins.
    pub fn find_child(&self, token: &str) -> Option<&Arc<CommandNode>> {
        if self.children.is_empty() {
            return None;
        }
        let token = normalize(token);
        self.children
            .iter()
            .find(|child| child.aliases.contains_normalized(&token))
            .map(|child| &child.node)
    }

    /// Usage template with the placeholder replaced by `label`
    pub fn render_usage(&self, label: &str) -> String {
        self.usage.replace(USAGE_PLACEHOLDER, label)
    }

    /// Label of a root command; `None` for subcommands
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw usage template, placeholder included
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Root aliases (empty for subcommands)
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Owning namespace (empty for subcommands)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn permission_message(&self) -> &str {
        &self.permission_message
    }

    pub fn not_player_message(&self) -> &str {
        &self.not_player_message
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Minimum argument count; `None` when unbounded
    pub fn min_args(&self) -> Option<usize> {
        self.min_args
    }

    /// Maximum argument count; `None` when unbounded
    pub fn max_args(&self) -> Option<usize> {
        self.max_args
    }

    pub fn is_player_only(&self) -> bool {
        self.player_only
    }

    pub fn is_subcommand(&self) -> bool {
        self.subcommand
    }

    pub fn children(&self) -> &[ChildEntry] {
        &self.children
    }

    /// Serializable snapshot of this node and its subtree
    pub fn describe(&self) -> CommandDescriptor {
        CommandDescriptor {
            label: self.label.clone(),
            namespace: (!self.namespace.is_empty()).then(|| self.namespace.clone()),
            aliases: self.aliases.clone(),
            description: self.description.clone(),
            usage: self.usage.clone(),
            permission: self.permission.clone(),
            has_predicate: self.predicate.is_some(),
            min_args: self.min_args,
            max_args: self.max_args,
            player_only: self.player_only,
            children: self
                .children
                .iter()
                .map(|child| ChildDescriptor {
                    aliases: child.aliases.clone(),
                    command: child.node.describe(),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("label", &self.label)
            .field("namespace", &self.namespace)
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .field("player_only", &self.player_only)
            .field("subcommand", &self.subcommand)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}
