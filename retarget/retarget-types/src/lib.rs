//! Core types for robot-to-human motion retargeting.
//!
//! This crate provides the shared vocabulary for generating retargeting
//! training data and scoring retargeted motions:
//!
//! - [`AngleRange`] / [`JointBounds`] - Per-joint sampling ranges
//! - [`JointAngleVector`] - One joint configuration
//! - [`LinkPose`] - World-frame pose of a robot link
//! - [`Rotation6`] - Continuous 6-D rotation representation
//! - [`PoseSample`] / [`SeedBatch`] - Assembled training poses
//! - [`MotionSequence`] - Joint configurations over time
//! - [`ForwardKinematics`] - The seam to an external FK solver
//!
//! # Design Philosophy
//!
//! These types are **pure data** plus the one trait seam the pipeline needs.
//! They know nothing about URDF files, latent encoders, or storage layout.
//! They're the common language between:
//!
//! - Pose samplers and dataset builders (retarget-sample)
//! - Motion comparison metrics (retarget-eval)
//! - Training pipelines consuming the flattened arrays
//!
//! # Ordering Guarantees
//!
//! Joint-keyed types sit on `BTreeMap`, so iteration is always in sorted
//! joint-name order. That order doubles as the sampler's stream-advance
//! order and the column order of serialized records; two processes that
//! agree on joint names agree on layout with no extra negotiation.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used
//! in headless training loops, dataset tooling, and hardware-facing code.
//!
//! # Example
//!
//! ```
//! use retarget_types::{AngleRange, JointBounds, JointAngleVector};
//!
//! let bounds = JointBounds::from_pairs([
//!     ("neck_pitch", AngleRange::new(-0.4, 0.55)?),
//!     ("neck_yaw", AngleRange::new(-1.4, 1.4)?),
//! ]);
//!
//! let angles = JointAngleVector::from_pairs([("neck_pitch", 0.1), ("neck_yaw", -0.3)]);
//! assert_eq!(angles.sorted_values(), vec![0.1, -0.3]);
//! assert!(bounds.iter().all(|(name, range)| {
//!     angles.get(name).is_some_and(|a| range.contains(a))
//! }));
//! # Ok::<(), retarget_types::RetargetError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod angles;
mod error;
mod kinematics;
mod motion;
mod pose;
mod rotation;

// Re-export angle types
pub use angles::{AngleRange, JointAngleVector, JointBounds};

// Re-export pose types
pub use pose::{LinkPose, PoseSample, SeedBatch};

// Re-export rotation representation
pub use rotation::Rotation6;

// Re-export motion types
pub use motion::MotionSequence;

// Re-export the FK seam
pub use kinematics::ForwardKinematics;

// Re-export error types
pub use error::{Result, RetargetError};

// Re-export math types for convenience
pub use nalgebra::{Matrix3, Point3, UnitQuaternion, Vector3};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        AngleRange, ForwardKinematics, JointAngleVector, JointBounds, LinkPose, MotionSequence,
        PoseSample, RetargetError, Rotation6, SeedBatch,
    };
}
