//! CLI errors and exit codes for scripting.
//!
//! Responsibilities:
//! - Define the user-facing failures of shortcut commands.
//! - Map those failures to structured exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use shortcut_config::KeybindError;
use thiserror::Error;

/// Failures a user can fix by changing the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown action '{0}'. Run 'shortcuts list' to see available actions")]
    UnknownAction(String),

    #[error("Invalid binding '{input}': {source}")]
    InvalidBinding {
        input: String,
        source: KeybindError,
    },

    #[error("Invalid layout '{0}'. Valid values are 'qwerty' or 'azerty'")]
    InvalidLayout(String),

    #[error("Invalid output format '{0}'. Valid values are 'table' or 'json'")]
    InvalidOutputFormat(String),

    #[error(
        "Binding {binding} for '{id}' conflicts with: {}. Use --force to apply anyway",
        .conflicts.join(", ")
    )]
    Conflict {
        id: String,
        binding: String,
        conflicts: Vec<String>,
    },
}

/// Structured exit codes for shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including I/O errors.
    GeneralError = 1,

    /// The action id is not in the catalog.
    NotFound = 4,

    /// Bad binding string, layout name, or output format.
    ValidationError = 5,

    /// The binding is already used by a conflicting action.
    Conflict = 6,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::UnknownAction(_) => ExitCode::NotFound,
            CliError::InvalidBinding { .. }
            | CliError::InvalidLayout(_)
            | CliError::InvalidOutputFormat(_) => ExitCode::ValidationError,
            CliError::Conflict { .. } => ExitCode::Conflict,
        }
    }
}

/// Extract exit codes from `anyhow::Error`.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no `CliError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<CliError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::Conflict.as_i32(), 6);
    }

    #[test]
    fn test_cli_error_in_chain_sets_exit_code() {
        let result: Result<(), CliError> = Err(CliError::UnknownAction("nope".into()));
        let err = result.context("Failed to bind").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_conflict_message_lists_actions() {
        let err = CliError::Conflict {
            id: "editor.edit.undo".into(),
            binding: "Ctrl+S".into(),
            conflicts: vec!["editor.file.save".into(), "editor.file.quickSave".into()],
        };
        assert_eq!(ExitCode::from(&err), ExitCode::Conflict);
        assert!(
            err.to_string()
                .contains("editor.file.save, editor.file.quickSave")
        );
    }
}
