//! Motion comparison metrics for retargeting evaluation.
//!
//! Scores how well a predicted robot motion reproduces a ground-truth one,
//! frame by frame, under one of three metrics:
//!
//! - [`CompareMode::Joint`] - Mean circular joint-angle distance (bounded
//!   by pi, no kinematics needed)
//! - [`CompareMode::Link`] - Mean Euclidean drift of the profile's
//!   evaluation links in workspace coordinates
//! - [`CompareMode::Cosine`] - One minus the cosine similarity of
//!   concatenated unit limb directions (bounded in `[0, 2]`)
//!
//! All metrics return 0 for a perfect match and fail loudly on mismatched
//! or empty inputs rather than coercing them.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. Kinematics
//! arrive through the [`ForwardKinematics`](retarget_types::ForwardKinematics)
//! seam.
//!
//! # Example
//!
//! ```
//! use retarget_eval::{compare, CompareMode};
//! use retarget_robot::{KeypointRule, KeypointSpec, RobotProfile, RobotType};
//! use retarget_types::{
//!     AngleRange, ForwardKinematics, JointAngleVector, JointBounds, LinkPose, MotionSequence,
//! };
//! # use std::collections::HashMap;
//! # use nalgebra::Point3;
//!
//! struct StubChain;
//! # impl ForwardKinematics for StubChain {
//! #     fn forward_kinematics(
//! #         &self,
//! #         angles: &JointAngleVector,
//! #     ) -> retarget_types::Result<HashMap<String, LinkPose>> {
//! #         let j = angles.get("j").unwrap_or(0.0);
//! #         Ok(HashMap::from([(
//! #             "tip".to_string(),
//! #             LinkPose::from_position(Point3::new(j.cos(), j.sin(), 0.0)),
//! #         )]))
//! #     }
//! # }
//!
//! let profile = RobotProfile::new(
//!     RobotType::Reachy,
//!     JointBounds::from_pairs([("j", AngleRange::new(-3.0, 3.0)?)]),
//!     vec!["tip".to_string()],
//!     vec![KeypointSpec::new("right_wrist", KeypointRule::from_link("tip"))],
//!     vec!["tip".to_string()],
//!     Vec::new(),
//! )?;
//!
//! let motion: MotionSequence = (0..5)
//!     .map(|i| JointAngleVector::from_pairs([("j", f64::from(i) * 0.1)]))
//!     .collect();
//!
//! let error = compare(CompareMode::Joint, &motion, &motion, &profile, &StubChain)?;
//! assert_eq!(error, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod metrics;
mod mode;

// Re-export the metric entry points
pub use metrics::{compare, wrapped_angle_distance};

// Re-export mode selection
pub use mode::CompareMode;

// Re-export error types
pub use error::{EvalError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{CompareMode, EvalError, compare, wrapped_angle_distance};
}
