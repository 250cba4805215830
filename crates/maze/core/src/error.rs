//! Common error infrastructure for maze agents.
//!
//! Agent crates define their own error enums and classify them through
//! [`MazeError`], so an engine can decide whether a failure is its own fault
//! (it sent malformed input) or a broken invariant inside the agent.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The engine delivered input that violates the agent contract.
    ///
    /// Examples: ping response without a goody entry
    Validation,

    /// An agent invariant no longer holds; the episode cannot continue.
    ///
    /// Examples: no candidate move left for a distance comparison
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller (not the agent) is at fault.
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all agent errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who broke the contract, not by impact
pub trait MazeError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
