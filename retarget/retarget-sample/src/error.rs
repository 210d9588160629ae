//! Error types for the sampling pipeline.

use thiserror::Error;

/// Errors that can occur while generating or persisting pose data.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A robot profile operation failed.
    #[error(transparent)]
    Robot(#[from] retarget_robot::ProfileError),

    /// A core type operation or the FK collaborator failed.
    #[error(transparent)]
    Retarget(#[from] retarget_types::RetargetError),

    /// The latent score slice is empty.
    #[error("latent scores are empty")]
    EmptyScores,

    /// The latent scores cannot form a probability distribution.
    #[error("invalid latent scores: {reason}")]
    InvalidScores {
        /// What disqualifies the scores.
        reason: String,
    },

    /// More distinct indices requested than the distribution can yield.
    #[error(
        "cannot draw {requested} distinct indices: only {available} eligible \
         (positive probability, index > 0)"
    )]
    CountUnreachable {
        /// Indices requested.
        requested: usize,
        /// Eligible indices available.
        available: usize,
    },

    /// The resampling rejection loop hit its attempt budget.
    #[error(
        "resampling exhausted {attempts} attempts with {selected} of {requested} \
         indices selected"
    )]
    ResampleAttemptsExhausted {
        /// Attempts consumed.
        attempts: usize,
        /// Distinct indices selected before giving up.
        selected: usize,
        /// Distinct indices requested.
        requested: usize,
    },

    /// Scores and poses disagree on length.
    #[error("score count mismatch: {scores} scores for {poses} poses")]
    ScoreCountMismatch {
        /// Number of latent scores.
        scores: usize,
        /// Number of poses.
        poses: usize,
    },

    /// Invalid holdout split denominator.
    #[error("invalid split denominator: {denominator} (must be >= 1)")]
    InvalidSplit {
        /// The offending denominator.
        denominator: usize,
    },

    /// Invalid sampling parameters.
    #[error("invalid sample parameters: {reason}")]
    InvalidParams {
        /// What disqualifies the parameters.
        reason: String,
    },

    /// A persisted archive failed shape validation.
    #[error("invalid archive: {reason}")]
    InvalidArchive {
        /// What is malformed.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SampleError {
    /// Creates an invalid scores error.
    #[must_use]
    pub fn invalid_scores(reason: impl Into<String>) -> Self {
        Self::InvalidScores {
            reason: reason.into(),
        }
    }

    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// Creates an invalid archive error.
    #[must_use]
    pub fn invalid_archive(reason: impl Into<String>) -> Self {
        Self::InvalidArchive {
            reason: reason.into(),
        }
    }

    /// Creates an IO error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }
}

impl From<std::io::Error> for SampleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SampleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for sampling pipeline operations.
pub type Result<T> = std::result::Result<T, SampleError>;
