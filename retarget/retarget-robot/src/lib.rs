//! Robot capability profiles for motion retargeting.
//!
//! A [`RobotProfile`] bundles everything the sampling and evaluation crates
//! need to know about one robot:
//!
//! - [`RobotType`] - Which platform the profile describes
//! - Joint bounds - Per-joint sampling ranges (radians)
//! - Link ordering - The canonical order of every per-link array
//! - [`KeypointSpec`] / [`KeypointRule`] - How human keypoints derive from
//!   link positions
//! - Evaluation links and [`LimbVector`] pairs - What the comparison metrics
//!   read
//!
//! Reachy ships with curated tables; other robots load their profiles from
//! configuration (profiles are plain serde types).
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**.
//!
//! # Example
//!
//! ```
//! use retarget_robot::{RobotProfile, RobotType};
//!
//! let profile = RobotProfile::for_robot(RobotType::Reachy)?;
//! assert_eq!(profile.link_index("torso"), Some(1));
//! assert_eq!(profile.position_dim(), 93);
//!
//! // Robots without curated tables are an explicit error, not a guess.
//! assert!(RobotProfile::for_robot(RobotType::Nao).is_err());
//! # Ok::<(), retarget_robot::ProfileError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod keypoint;
mod profile;
mod reachy;
mod robot;

// Re-export profile types
pub use profile::{LimbVector, RobotProfile};

// Re-export keypoint rules
pub use keypoint::{KeypointRule, KeypointSpec};

// Re-export robot platform enum
pub use robot::RobotType;

// Re-export error types
pub use error::{ProfileError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        KeypointRule, KeypointSpec, LimbVector, ProfileError, RobotProfile, RobotType,
    };
}
