//! Error types for retargeting data types.

use thiserror::Error;

/// Errors that can occur when building or consuming retargeting types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RetargetError {
    /// Invalid joint angle range.
    #[error("invalid angle range: [{min}, {max}] (must be finite with min <= max)")]
    InvalidRange {
        /// Lower bound in radians.
        min: f64,
        /// Upper bound in radians.
        max: f64,
    },

    /// The forward kinematics collaborator rejected a configuration.
    #[error("forward kinematics failed: {reason}")]
    Kinematics {
        /// Description of the failure.
        reason: String,
    },

    /// A link required by the caller is missing from a kinematics result.
    #[error("link not found in kinematics result: {link}")]
    LinkNotFound {
        /// Name of the missing link.
        link: String,
    },

    /// Aligned per-link arrays have different lengths.
    #[error("pose arrays misaligned: {positions} link positions vs {rotations} rotations")]
    PoseMisaligned {
        /// Number of link positions.
        positions: usize,
        /// Number of link rotations.
        rotations: usize,
    },

    /// Non-finite value where a finite one is required.
    ///
    /// Never raised by this crate's own code: NaN from malformed input
    /// propagates unchecked through sampling and conversion. The variant is
    /// for [`ForwardKinematics`](crate::ForwardKinematics) implementations
    /// that validate solver output before handing it back.
    #[error("non-finite value in {what}")]
    NonFinite {
        /// What contained the non-finite value.
        what: String,
    },
}

impl RetargetError {
    /// Creates an invalid range error.
    #[must_use]
    pub const fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Creates a kinematics failure error.
    #[must_use]
    pub fn kinematics(reason: impl Into<String>) -> Self {
        Self::Kinematics {
            reason: reason.into(),
        }
    }

    /// Creates a link not found error.
    #[must_use]
    pub fn link_not_found(link: impl Into<String>) -> Self {
        Self::LinkNotFound { link: link.into() }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(what: impl Into<String>) -> Self {
        Self::NonFinite { what: what.into() }
    }

    /// Check if this is a kinematics failure.
    #[must_use]
    pub fn is_kinematics(&self) -> bool {
        matches!(self, Self::Kinematics { .. })
    }

    /// Check if this is a missing-link error.
    #[must_use]
    pub fn is_link_not_found(&self) -> bool {
        matches!(self, Self::LinkNotFound { .. })
    }
}

/// Result type for retargeting type operations.
pub type Result<T> = std::result::Result<T, RetargetError>;
