//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use cmdtree_core::log_op_start;
/// log_op_start!("dispatch");
/// log_op_start!("dispatch", label = "example");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use cmdtree_core::log_op_end;
/// log_op_end!("dispatch", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error must expose `kind()` and `code()` (as `ConfigError` and
/// `SettingsError` do).
///
/// # Example
///
/// ```
/// # use cmdtree_core::{log_op_error, ConfigError};
/// let err = ConfigError::RootUnnamed;
/// log_op_error!("build_command", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            $($field)*
        );
    }};
}

/// Log a guard rejection
///
/// Rejections are normal dispatch outcomes, not errors, so they log at info.
///
/// # Example
///
/// ```
/// # use cmdtree_core::log_op_reject;
/// log_op_reject!("dispatch", reason = "permission", depth = 0);
/// ```
#[macro_export]
macro_rules! log_op_reject {
    ($op:expr, reason = $reason:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_REJECT,
            reason = $reason,
        );
    };
    ($op:expr, reason = $reason:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_REJECT,
            reason = $reason,
            $($field)*
        );
    };
}
