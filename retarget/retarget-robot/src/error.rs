//! Error types for robot profile operations.

use thiserror::Error;

use crate::robot::RobotType;

/// Errors that can occur when building or validating a robot profile.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    /// No curated built-in profile exists for the robot.
    #[error("no built-in profile for robot: {0} (load one from configuration)")]
    NoBuiltinProfile(RobotType),

    /// A rule or metric references a link missing from the link ordering.
    #[error("unknown link {link:?} referenced by {context}")]
    UnknownLink {
        /// The missing link name.
        link: String,
        /// Where the reference came from (keypoint rule, evaluation set, ...).
        context: String,
    },

    /// A positions slice does not match the profile's link count.
    #[error("link count mismatch: profile has {expected} links, got {actual} positions")]
    LinkCountMismatch {
        /// Links in the profile ordering.
        expected: usize,
        /// Positions supplied by the caller.
        actual: usize,
    },

    /// The profile has no joint bounds.
    #[error("profile has no joint bounds")]
    EmptyBounds,

    /// The profile has no keypoint rules.
    #[error("profile has no keypoint rules")]
    EmptyKeypoints,

    /// An angle range in the bounds table is invalid.
    #[error(transparent)]
    InvalidRange(#[from] retarget_types::RetargetError),
}

impl ProfileError {
    /// Creates an unknown link error.
    #[must_use]
    pub fn unknown_link(link: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownLink {
            link: link.into(),
            context: context.into(),
        }
    }

    /// Creates a link count mismatch error.
    #[must_use]
    pub const fn link_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::LinkCountMismatch { expected, actual }
    }
}

/// Result type for robot profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
