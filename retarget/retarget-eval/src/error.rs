//! Error types for motion comparison.

use thiserror::Error;

/// Errors that can occur while comparing motions.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Predicted and ground-truth sequences have different lengths.
    #[error(
        "motion length mismatch: {predicted} predicted frames vs {ground_truth} ground truth"
    )]
    LengthMismatch {
        /// Frames in the predicted sequence.
        predicted: usize,
        /// Frames in the ground-truth sequence.
        ground_truth: usize,
    },

    /// Both sequences are empty; there is nothing to compare.
    #[error("cannot compare empty motions")]
    EmptyMotion,

    /// The sequences share no joint names.
    #[error("predicted and ground-truth motions share no joints")]
    NoCommonJoints,

    /// The profile configures no links for the link metric.
    #[error("robot profile has no evaluation links")]
    NoEvaluationLinks,

    /// The profile configures no limb pairs for the cosine metric.
    #[error("robot profile has no limb vectors")]
    NoLimbVectors,

    /// A limb collapsed to zero length, so its direction is undefined.
    #[error("limb {from} -> {to} has zero length")]
    ZeroLengthLimb {
        /// Link at the limb's proximal end.
        from: String,
        /// Link at the limb's distal end.
        to: String,
    },

    /// A robot profile operation failed.
    #[error(transparent)]
    Robot(#[from] retarget_robot::ProfileError),

    /// A core type operation or the FK collaborator failed.
    #[error(transparent)]
    Retarget(#[from] retarget_types::RetargetError),
}

impl EvalError {
    /// Creates a zero-length limb error.
    #[must_use]
    pub fn zero_length_limb(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::ZeroLengthLimb {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result type for motion comparison operations.
pub type Result<T> = std::result::Result<T, EvalError>;
