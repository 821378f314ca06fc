//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `ProgressionError`, `ActionError`) are defined
//! next to the operations they guard. This module provides the shared
//! classification every one of them implements.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Taxonomy**: Every error maps onto one [`ErrorKind`] so callers can react
//!   uniformly (re-prompt on a bad selection, pick another action on a shortfall)
//!
//! Numeric safety nets (zero denominators, negative HP/MP, stats under their
//! floor) are never errors. They are enforced silently where the value is
//! computed.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: not enough MP, empty satchel
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: menu index out of range, unknown skill id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the encounter cannot continue.
    ///
    /// Examples: the input source was closed
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }
}

/// Coarse error taxonomy shared by every player-facing failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Menu selection out of range. Recovered by re-prompting.
    InvalidAction,
    /// Not enough MP, stones, or an empty item stack.
    InsufficientResource,
    /// Skill or item identifier not found.
    UnknownTarget,
    /// Failure of an external collaborator (input closed, I/O).
    Interface,
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Map every variant onto exactly one [`ErrorKind`]
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the taxonomy bucket of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log correlation and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
