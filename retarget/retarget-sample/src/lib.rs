//! Seeded pose sampling and dataset assembly for motion retargeting.
//!
//! This crate turns a robot profile plus a forward kinematics solver into
//! training data for a retargeting model:
//!
//! - [`JointSampler`] - Reproducible uniform joint-space draws
//! - [`assemble_pose`] - One FK evaluation into every derived representation
//! - [`sample_seed_batch`] / [`sample_seed_batches`] - Per-seed batch
//!   generation, parallel across seeds
//! - [`resample_by_density`] / [`balance_batch`] - Latent-density-weighted
//!   subset selection
//! - [`split_holdout`] - Deterministic train/test partition over seeds
//! - [`write_seed_archive`] / [`read_seed_archive`] - Per-seed file pairs
//!
//! # Reproducibility
//!
//! Every random decision flows through an explicitly seeded stream. One
//! seed gives one `ChaCha8` stream, advanced in sorted joint-name order, so
//! a dataset regenerates bit-for-bit from its seed list no matter the
//! machine, thread count, or map insertion order. Seeds share nothing, which
//! is what lets [`sample_seed_batches`] fan out over rayon while matching
//! sequential output exactly.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use nalgebra::Point3;
//! use retarget_robot::{KeypointRule, KeypointSpec, RobotProfile, RobotType};
//! use retarget_sample::{sample_seed_batches, SampleParams};
//! use retarget_types::{
//!     AngleRange, ForwardKinematics, JointAngleVector, JointBounds, LinkPose,
//! };
//!
//! struct StubChain;
//!
//! impl ForwardKinematics for StubChain {
//!     fn forward_kinematics(
//!         &self,
//!         angles: &JointAngleVector,
//!     ) -> retarget_types::Result<HashMap<String, LinkPose>> {
//!         let reach = angles.get("j").unwrap_or(0.0);
//!         Ok(HashMap::from([(
//!             "tip".to_string(),
//!             LinkPose::from_position(Point3::new(reach, 0.0, 0.0)),
//!         )]))
//!     }
//! }
//!
//! let profile = RobotProfile::new(
//!     RobotType::Reachy,
//!     JointBounds::from_pairs([("j", AngleRange::new(-1.0, 1.0)?)]),
//!     vec!["tip".to_string()],
//!     vec![KeypointSpec::new("right_wrist", KeypointRule::from_link("tip"))],
//!     vec!["tip".to_string()],
//!     Vec::new(),
//! )?;
//!
//! let params = SampleParams::quick().num_seeds(2).poses_per_seed(4);
//! let batches = sample_seed_batches(&profile, &StubChain, &params)?;
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches[0].len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod archive;
mod assemble;
mod batch;
mod error;
mod resample;
mod sampler;
mod splits;

// Re-export the sampler
pub use sampler::JointSampler;

// Re-export pose assembly
pub use assemble::assemble_pose;

// Re-export batch generation
pub use batch::{SampleParams, sample_seed_batch, sample_seed_batches};

// Re-export latent resampling
pub use resample::{balance_batch, draw_index, resample_by_density};

// Re-export holdout splitting
pub use splits::split_holdout;

// Re-export archive I/O
pub use archive::{
    AngleRecords, PoseArrays, SeedArchive, angle_file_path, pose_file_path, read_angle_records,
    read_seed_archive, write_seed_archive,
};

// Re-export error types
pub use error::{Result, SampleError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        JointSampler, PoseArrays, SampleError, SampleParams, assemble_pose, balance_batch,
        resample_by_density, sample_seed_batch, sample_seed_batches, split_holdout,
    };
}
