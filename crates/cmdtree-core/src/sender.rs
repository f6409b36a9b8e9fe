//! Sender abstraction
//!
//! The host owns the concept of "who typed this command". The engine only
//! needs four facts about a sender, so the host adapts its own type to
//! `CommandSender`.

/// The party that issued an invocation
///
/// Rejection messages are delivered through `send_message`; the engine never
/// writes anywhere else. Implementations that record messages typically use
/// interior mutability, since dispatch only ever holds `&dyn CommandSender`.
///
/// # Example
/// ```
/// use cmdtree_core::CommandSender;
///
/// struct Console;
///
/// impl CommandSender for Console {
///     fn name(&self) -> &str {
///         "console"
///     }
///
///     fn has_permission(&self, _permission: &str) -> bool {
///         true
///     }
///
///     fn is_player(&self) -> bool {
///         false
///     }
///
///     fn send_message(&self, message: &str) {
///         println!("{message}");
///     }
/// }
/// ```
pub trait CommandSender {
    /// Display name, used for logging only
    fn name(&self) -> &str;

    /// Check whether the sender holds a permission node
    fn has_permission(&self, permission: &str) -> bool;

    /// Whether the sender is a player (as opposed to a console, a command
    /// block, or any other non-player identity)
    fn is_player(&self) -> bool;

    /// Deliver a text message to the sender
    fn send_message(&self, message: &str);
}
