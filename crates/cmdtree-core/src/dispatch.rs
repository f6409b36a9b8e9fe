//! Guard chain and recursive dispatch
//!
//! `CommandNode::dispatch` decides, for one invocation, whether the sender is
//! turned away, handed to a child, or handed to this node's own handler.
//!
//! ## Guard order
//!
//! The first failing guard wins; no later guard runs.
//!
//! 1. Permission: configured and not held by the sender
//! 2. Predicate: configured and false for the sender
//! 3. Identity: player-only node, non-player sender
//! 4. Lower bound: fewer arguments than `min_args`
//! 5. Upper bound: more arguments than `max_args`
//!
//! A rejection sends exactly one message to the sender and counts as handled
//! (`true`). Guards 1 and 2 share the node's permission message; guards 4 and
//! 5 send the rendered usage.
//!
//! ## Delegation
//!
//! After the guards pass, a non-empty argument list is matched against the
//! children by its first token only. A match recurses into the child with
//! that token removed. There is no backtracking: if the child rejects, the
//! rejection stands and neither siblings nor this node's handler are tried.
//! Without a match the node's own handler runs with the arguments untouched.

use cmdtree_core_types::schema::{
    EVENT_DELEGATE, REASON_NOT_PLAYER, REASON_PERMISSION, REASON_PREDICATE, REASON_TOO_FEW_ARGS,
    REASON_TOO_MANY_ARGS,
};

use crate::handler::{CommandHandler, Invocation};
use crate::log_op_reject;
use crate::model::CommandNode;

const OP_DISPATCH: &str = "dispatch";

/// Why a guard turned an invocation away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    PermissionDenied,
    PredicateFailed,
    NotAPlayer,
    TooFewArguments,
    TooManyArguments,
}

impl Rejection {
    /// Stable reason code used in log events
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::PermissionDenied => REASON_PERMISSION,
            Rejection::PredicateFailed => REASON_PREDICATE,
            Rejection::NotAPlayer => REASON_NOT_PLAYER,
            Rejection::TooFewArguments => REASON_TOO_FEW_ARGS,
            Rejection::TooManyArguments => REASON_TOO_MANY_ARGS,
        }
    }
}

impl CommandNode {
    /// Run the guard chain for this node only
    ///
    /// Children are not consulted. Useful for hosts that want to grey out
    /// commands a sender could not run.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard as a `Rejection`.
    pub fn check_guards(&self, invocation: &Invocation<'_>) -> Result<(), Rejection> {
        let sender = invocation.sender;

        if let Some(permission) = &self.permission {
            if !sender.has_permission(permission) {
                return Err(Rejection::PermissionDenied);
            }
        }

        if let Some(predicate) = &self.predicate {
            if !predicate(sender) {
                return Err(Rejection::PredicateFailed);
            }
        }

        if self.player_only && !sender.is_player() {
            return Err(Rejection::NotAPlayer);
        }

        let argc = invocation.args.len();
        if self.min_args.is_some_and(|min| argc < min) {
            return Err(Rejection::TooFewArguments);
        }
        if self.max_args.is_some_and(|max| argc > max) {
            return Err(Rejection::TooManyArguments);
        }

        Ok(())
    }

    /// Message a sender receives for `rejection`
    pub fn rejection_message(&self, rejection: Rejection, label: &str) -> String {
        match rejection {
            Rejection::PermissionDenied | Rejection::PredicateFailed => {
                self.permission_message.clone()
            }
            Rejection::NotAPlayer => self.not_player_message.clone(),
            Rejection::TooFewArguments | Rejection::TooManyArguments => self.render_usage(label),
        }
    }

    /// Resolve and run one invocation against this node
    ///
    /// Returns the completion signal of whichever handler ran, or `true` if a
    /// guard rejected the invocation.
    pub fn dispatch(&self, invocation: &Invocation<'_>) -> bool {
        if let Err(rejection) = self.check_guards(invocation) {
            log_op_reject!(
                OP_DISPATCH,
                reason = rejection.reason(),
                invocation_id = %invocation.id,
                label = invocation.label,
                depth = invocation.depth
            );
            invocation
                .sender
                .send_message(&self.rejection_message(rejection, invocation.label));
            return true;
        }

        if let Some(token) = invocation.args.first() {
            if let Some(child) = self.find_child(token) {
                tracing::debug!(
                    component = module_path!(),
                    op = OP_DISPATCH,
                    event = EVENT_DELEGATE,
                    invocation_id = %invocation.id,
                    alias = *token,
                    depth = invocation.depth
                );
                return child.handle(&invocation.shifted());
            }
        }

        self.handler.handle(invocation)
    }
}

impl CommandHandler for CommandNode {
    fn handle(&self, invocation: &Invocation<'_>) -> bool {
        self.dispatch(invocation)
    }
}
