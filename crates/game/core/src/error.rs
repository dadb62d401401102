//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`EquipError`, `DropError`, `PopulateError`,
//! `CommandError`) live beside the operations they guard. They all implement
//! [`GameError`] so a shell can decide how to react without matching on every
//! variant.
//!
//! None of these errors leave state half-modified: a rejected pickup leaves the
//! item where it was, a rejected drop leaves the equipment untouched.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the command was fine but the situation forbids it (item too heavy)
/// - **Validation**: the request itself is malformed (bad ring index, unequippable item)
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: the caller broke a precondition and the operation cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can retry later or with a different command.
    Recoverable,

    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Cannot continue.
    ///
    /// Examples: board too small for its occupants, command after game over
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
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or broken contract.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for logging fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
