//! Error types for the combat session.

use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::io::InterfaceError;
use crate::progression::ProgressionError;

/// A player action that could not be carried out.
///
/// Every variant is recovered inside the session by reporting it and
/// prompting again. None of them consume the round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Selection {index} is not one of the {options} options.")]
    InvalidSelection { index: usize, options: usize },

    #[error("No skills available yet.")]
    NoSkillsLearned,

    #[error("Your satchel is empty.")]
    EmptySatchel,

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSelection { .. } => ErrorSeverity::Validation,
            Self::NoSkillsLearned | Self::EmptySatchel => ErrorSeverity::Recoverable,
            Self::Progression(inner) => inner.severity(),
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSelection { .. } => ErrorKind::InvalidAction,
            Self::NoSkillsLearned | Self::EmptySatchel => ErrorKind::InsufficientResource,
            Self::Progression(inner) => inner.kind(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSelection { .. } => "ACTION_INVALID_SELECTION",
            Self::NoSkillsLearned => "ACTION_NO_SKILLS_LEARNED",
            Self::EmptySatchel => "ACTION_EMPTY_SATCHEL",
            Self::Progression(inner) => inner.error_code(),
        }
    }
}

/// Errors that end an encounter without a combat result.
///
/// Only the host can fail this way; rule violations never escape a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("encounter interrupted: {0}")]
    Interface(#[from] InterfaceError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Interface
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Interface(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SkillId;

    #[test]
    fn progression_failures_keep_their_classification() {
        let error = ActionError::from(ProgressionError::UnknownSkill(SkillId::Time));
        assert_eq!(error.kind(), ErrorKind::UnknownTarget);
        assert_eq!(error.to_string(), "Skill not mastered.");
        assert!(error.severity().is_recoverable());
    }

    #[test]
    fn interface_errors_are_fatal() {
        let error = EncounterError::from(InterfaceError::InputClosed);
        assert!(!error.severity().is_recoverable());
        assert_eq!(error.error_code(), "INTERFACE_INPUT_CLOSED");
    }
}
