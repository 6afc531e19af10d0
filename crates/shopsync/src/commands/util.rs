//! Shared helpers for command handlers.

use shopsync_core::ActionStatus;

use crate::error::CliError;

/// Lift a controller's swallowed failure into a CLI error.
///
/// Controllers log and swallow API errors per the synchronization
/// contract; the CLI still owes the user a diagnostic and a non-zero
/// exit code, so the recorded message is re-raised here.
pub fn check_refresh(ok: bool, last_error: Option<&str>) -> Result<(), CliError> {
    if ok {
        return Ok(());
    }
    Err(CliError::from_swallowed(last_error.unwrap_or("unknown error")))
}

/// Map a mutation outcome to a CLI result, given the missing-field list
/// for the blocked case.
pub fn check_action(
    status: ActionStatus,
    missing: &[&'static str],
    last_error: Option<&str>,
) -> Result<(), CliError> {
    match status {
        ActionStatus::Completed => Ok(()),
        ActionStatus::Blocked => Err(CliError::Validation {
            field: "form".into(),
            reason: format!("required fields missing: {}", missing.join(", ")),
        }),
        ActionStatus::Failed => Err(CliError::from_swallowed(
            last_error.unwrap_or("unknown error"),
        )),
    }
}
