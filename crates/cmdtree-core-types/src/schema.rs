//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.
//! Log sites spell field names literally inside `tracing` macros; readers
//! (the capture layer, log assertions) look them up through these constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_INVOCATION_ID: &str = "invocation_id";

// Command identifiers
pub const FIELD_LABEL: &str = "label";
pub const FIELD_SENDER: &str = "sender";
pub const FIELD_ALIAS: &str = "alias";

// Dispatch shape
pub const FIELD_ARGS_LEN: &str = "args_len";
pub const FIELD_DEPTH: &str = "depth";
pub const FIELD_REASON: &str = "reason";
pub const FIELD_HANDLED: &str = "handled";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_REJECT: &str = "reject";
pub const EVENT_DELEGATE: &str = "delegate";

// Guard rejection reasons, in guard-chain order
pub const REASON_PERMISSION: &str = "permission";
pub const REASON_PREDICATE: &str = "predicate";
pub const REASON_NOT_PLAYER: &str = "not_player";
pub const REASON_TOO_FEW_ARGS: &str = "too_few_args";
pub const REASON_TOO_MANY_ARGS: &str = "too_many_args";
