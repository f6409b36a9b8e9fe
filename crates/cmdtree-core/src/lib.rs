//! cmdtree Core - hierarchical command dispatch for plugin hosts
//!
//! This crate lets a plugin declare a command once, as a tree, and have the
//! engine enforce everything a handler would otherwise check by hand:
//! - Permission nodes and custom sender predicates
//! - Player-only commands
//! - Inclusive argument-count bounds, answered with a rendered usage line
//! - Subcommand routing by case-insensitive alias sets, to any depth
//! - One-time registration of each root with the host command table
//!
//! Trees are built with `CommandBuilder`, frozen into `Arc<CommandNode>`, and
//! are safe to dispatch from any number of threads.
//!
//! # Example
//!
//! ```
//! use cmdtree_core::{CommandNode, InMemoryRegistry, Invocation};
//!
//! let registry = InMemoryRegistry::new();
//!
//! let reload = CommandNode::builder()
//!     .subcommand()
//!     .permission("shop.admin")
//!     .executor_fn(|inv: &Invocation<'_>| {
//!         inv.sender.send_message("reloaded");
//!         true
//!     })
//!     .build(&registry)?;
//!
//! CommandNode::builder()
//!     .name("shop")
//!     .namespace("market")
//!     .executor_fn(|_: &Invocation<'_>| true)
//!     .child(reload, ["reload", "rl"])?
//!     .build(&registry)?;
//!
//! assert!(registry.get("market:shop").is_some());
//! # Ok::<(), cmdtree_core::ConfigError>(())
//! ```

pub mod builder;
pub mod dispatch;
pub mod errors;
pub mod handler;
pub mod logging_facility;
pub mod model;
pub mod registry;
pub mod sender;
pub mod settings;

// The logging macros expand to `$crate::core_types::schema::*`
pub use cmdtree_core_types as core_types;

// Re-export commonly used types
pub use builder::CommandBuilder;
pub use core_types::InvocationId;
pub use dispatch::Rejection;
pub use errors::{ConfigError, ErrorKind, RegistryError, Result, SettingsError};
pub use handler::{
    handler_fn, CommandHandler, CommandIdentity, FnHandler, Invocation, SenderPredicate,
};
pub use model::{AliasSet, ChildDescriptor, ChildEntry, CommandDescriptor, CommandNode};
pub use registry::{CommandRegistry, InMemoryRegistry, NoopRegistry, Registration};
pub use sender::CommandSender;
pub use settings::Settings;
