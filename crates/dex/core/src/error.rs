//! Common error infrastructure for dex-core.
//!
//! Domain-specific errors (`RuleError`, `FusionError`, ...) live next to the
//! operations that produce them. This module only provides the shared
//! classification used when those errors are logged or surfaced to a front end.
//!
//! Nothing in the core is fatal: every failure degrades a render instead of
//! aborting it, so the severity only distinguishes "the request was bad" from
//! "the catalog data was bad".

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was incomplete or contradictory (half-built rule, unknown donor).
    ///
    /// The request is ignored or partially applied; retrying with a corrected
    /// request succeeds.
    Validation,

    /// The catalog itself holds a value the core cannot interpret.
    ///
    /// Examples: a stat that is not an integer, a duplicated record number.
    Data,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Data => "data",
        }
    }

    /// Returns true if the error points at the loaded catalog rather than the request.
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data)
    }
}

/// Common trait for all dex-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by where the bad input came from, not by impact
/// - Error codes are stable snake_case strings, safe to match on in tests
pub trait DexError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
