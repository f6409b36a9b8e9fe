//! Command builder
//!
//! `CommandBuilder` is the only way to obtain a `CommandNode`. Setters record
//! values without checking them; `build()` validates the whole configuration
//! at once and freezes it.
//!
//! ## Root vs. subcommand
//!
//! A builder is in root mode unless `subcommand()` was called.
//!
//! - **Root**: needs a name and a handler. On success the node is handed to
//!   the host `CommandRegistry` exactly once before `build()` returns.
//! - **Subcommand**: must not declare a name, aliases or a namespace, and
//!   still needs a handler. The registry is never touched.
//!
//! ## Example
//!
//! ```
//! use cmdtree_core::{CommandNode, Invocation, NoopRegistry};
//!
//! let list = CommandNode::builder()
//!     .subcommand()
//!     .usage("/<command> list")
//!     .executor_fn(|inv: &Invocation<'_>| {
//!         inv.sender.send_message("nothing to list");
//!         true
//!     })
//!     .build(&NoopRegistry)?;
//!
//! let root = CommandNode::builder()
//!     .name("warp")
//!     .aliases(["w"])
//!     .namespace("travel")
//!     .executor_fn(|_: &Invocation<'_>| true)
//!     .child(list, ["list", "ls"])?
//!     .build(&NoopRegistry)?;
//!
//! assert_eq!(root.label(), Some("warp"));
//! # Ok::<(), cmdtree_core::ConfigError>(())
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::errors::{ConfigError, Result};
use crate::handler::{handler_fn, CommandHandler, Invocation, SenderPredicate};
use crate::model::{AliasSet, ChildEntry, CommandNode};
use crate::registry::{CommandRegistry, Registration};
use crate::sender::CommandSender;
use crate::settings::Settings;
use crate::{log_op_end, log_op_error, log_op_start};

const OP_BUILD: &str = "build_command";

/// Mutable staging object producing exactly one `CommandNode`
#[must_use = "a builder does nothing until build() is called"]
pub struct CommandBuilder {
    label: Option<String>,
    description: String,
    usage: String,
    aliases: Vec<String>,
    namespace: String,
    permission: Option<String>,
    permission_message: String,
    not_player_message: String,
    predicate: Option<SenderPredicate>,
    handler: Option<Arc<dyn CommandHandler>>,
    min_args: Option<usize>,
    max_args: Option<usize>,
    player_only: bool,
    subcommand: bool,
    children: Vec<ChildEntry>,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    /// Builder seeded with `Settings::default()`
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Builder seeded with host-supplied message templates
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            label: None,
            description: String::new(),
            usage: settings.usage.clone(),
            aliases: Vec::new(),
            namespace: String::new(),
            permission: None,
            permission_message: settings.permission_message.clone(),
            not_player_message: settings.not_player_message.clone(),
            predicate: None,
            handler: None,
            min_args: None,
            max_args: None,
            player_only: false,
            subcommand: false,
            children: Vec::new(),
        }
    }

    /// Switch to subcommand mode
    pub fn subcommand(mut self) -> Self {
        self.subcommand = true;
        self
    }

    /// Root label; an empty string counts as unset
    pub fn name(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Usage template; `<command>` is replaced by the invocation label
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Required permission node; an empty string means no permission check
    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        let permission = permission.into();
        self.permission = (!permission.is_empty()).then_some(permission);
        self
    }

    /// Message sent when the permission or predicate guard fails
    pub fn permission_message(mut self, message: impl Into<String>) -> Self {
        self.permission_message = message.into();
        self
    }

    /// Message sent when a player-only node is invoked by a non-player
    pub fn not_player_message(mut self, message: impl Into<String>) -> Self {
        self.not_player_message = message.into();
        self
    }

    /// Extra sender check, evaluated after the permission guard
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn CommandSender) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Terminal handler
    pub fn executor<H>(mut self, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Terminal handler given as a closure
    pub fn executor_fn<F>(self, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> bool + Send + Sync + 'static,
    {
        self.executor(handler_fn(handler))
    }

    pub fn min_args(mut self, min_args: usize) -> Self {
        self.min_args = Some(min_args);
        self
    }

    /// Upper argument bound
    ///
    /// Not checked against `min_args`: a builder with `min_args > max_args`
    /// builds fine and then rejects every invocation with the usage message.
    pub fn max_args(mut self, max_args: usize) -> Self {
        self.max_args = Some(max_args);
        self
    }

    /// Root aliases, replacing any set earlier
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Owning namespace of a root command (typically the plugin name)
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Restrict the node to player senders
    pub fn only_player(mut self) -> Self {
        self.player_only = true;
        self
    }

    /// Route `aliases` to `child`
    ///
    /// Aliases are lower-cased and de-duplicated. Alias sets of different
    /// children may overlap; lookup picks the child added first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyAliasSet` if `aliases` yields nothing.
    pub fn child<I, S>(mut self, child: Arc<CommandNode>, aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let aliases = AliasSet::new(aliases).ok_or(ConfigError::EmptyAliasSet)?;
        self.children.push(ChildEntry {
            aliases,
            node: child,
        });
        Ok(self)
    }

    /// Validate and freeze the configuration
    ///
    /// In root mode the finished node is registered with `registry` before
    /// it is returned. Building a second root from a fresh builder yields a
    /// second, independent registration.
    ///
    /// # Errors
    ///
    /// - Subcommand mode: `SubcommandNamed`, `SubcommandAliased`,
    ///   `SubcommandNamespaced`, `SubcommandWithoutHandler`
    /// - Root mode: `RootUnnamed`, `RootWithoutHandler`, or `Registration`
    ///   when the host refuses the command
    pub fn build(self, registry: &dyn CommandRegistry) -> Result<Arc<CommandNode>> {
        let start = Instant::now();
        let label = self.label.clone().unwrap_or_default();
        log_op_start!(OP_BUILD, label = %label, subcommand = self.subcommand);

        match self.build_inner(registry) {
            Ok(node) => {
                log_op_end!(
                    OP_BUILD,
                    duration_ms = start.elapsed().as_millis() as u64,
                    label = %label
                );
                Ok(node)
            }
            Err(err) => {
                log_op_error!(
                    OP_BUILD,
                    err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    label = %label
                );
                Err(err)
            }
        }
    }

    fn build_inner(self, registry: &dyn CommandRegistry) -> Result<Arc<CommandNode>> {
        self.validate()?;

        let subcommand = self.subcommand;
        let handler = self.handler.ok_or(if subcommand {
            ConfigError::SubcommandWithoutHandler
        } else {
            ConfigError::RootWithoutHandler
        })?;

        let node = Arc::new(CommandNode {
            label: self.label,
            description: self.description,
            usage: self.usage,
            aliases: self.aliases,
            namespace: self.namespace,
            permission: self.permission,
            permission_message: self.permission_message,
            not_player_message: self.not_player_message,
            predicate: self.predicate,
            handler,
            min_args: self.min_args,
            max_args: self.max_args,
            player_only: self.player_only,
            subcommand,
            children: self.children,
        });

        if !subcommand {
            let registration = Registration::new(node.clone());
            let label = registration.identity().label.clone();
            registry
                .register(registration)
                .map_err(|source| ConfigError::Registration { label, source })?;
        }

        Ok(node)
    }

    /// Shape checks that do not depend on the handler
    fn validate(&self) -> Result<()> {
        if self.subcommand {
            if self.label.is_some() {
                return Err(ConfigError::SubcommandNamed);
            }
            if !self.aliases.is_empty() {
                return Err(ConfigError::SubcommandAliased);
            }
            if !self.namespace.is_empty() {
                return Err(ConfigError::SubcommandNamespaced);
            }
        } else if self.label.is_none() {
            return Err(ConfigError::RootUnnamed);
        }
        Ok(())
    }
}
