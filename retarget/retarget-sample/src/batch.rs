//! Seed batch generation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use retarget_robot::RobotProfile;
use retarget_types::{ForwardKinematics, SeedBatch};

use crate::assemble::assemble_pose;
use crate::error::{Result, SampleError};
use crate::sampler::JointSampler;

/// Parameters for dataset generation.
///
/// # Example
///
/// ```
/// use retarget_sample::SampleParams;
///
/// let params = SampleParams::default();
/// assert_eq!(params.num_seeds, 500);
/// assert_eq!(params.poses_per_seed, 2000);
///
/// let small = SampleParams::quick().num_seeds(2);
/// assert_eq!(small.num_seeds, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleParams {
    /// Seeds to generate, used as `0..num_seeds`.
    pub num_seeds: u64,

    /// Poses drawn per seed.
    pub poses_per_seed: usize,

    /// Holdout denominator: the leading `batches / denominator` seed batches
    /// become the test split.
    pub holdout_denominator: usize,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            num_seeds: 500,
            poses_per_seed: 2000,
            holdout_denominator: 10, // first tenth of seeds held out
        }
    }
}

impl SampleParams {
    /// Small counts for smoke runs and tests.
    #[must_use]
    pub const fn quick() -> Self {
        Self {
            num_seeds: 4,
            poses_per_seed: 16,
            holdout_denominator: 4,
        }
    }

    /// Set the number of seeds.
    #[must_use]
    pub const fn num_seeds(mut self, num_seeds: u64) -> Self {
        self.num_seeds = num_seeds;
        self
    }

    /// Set the poses drawn per seed.
    #[must_use]
    pub const fn poses_per_seed(mut self, poses_per_seed: usize) -> Self {
        self.poses_per_seed = poses_per_seed;
        self
    }

    /// Set the holdout denominator.
    #[must_use]
    pub const fn holdout_denominator(mut self, holdout_denominator: usize) -> Self {
        self.holdout_denominator = holdout_denominator;
        self
    }

    /// Checks the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidParams`] when any count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.num_seeds == 0 {
            return Err(SampleError::invalid_params("num_seeds must be >= 1"));
        }
        if self.poses_per_seed == 0 {
            return Err(SampleError::invalid_params("poses_per_seed must be >= 1"));
        }
        if self.holdout_denominator == 0 {
            return Err(SampleError::invalid_params(
                "holdout_denominator must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Generates one seed's batch: draw, solve FK, assemble, `poses_per_seed`
/// times.
///
/// The sampler is seeded exactly once from `seed`, so the batch reproduces
/// bit-for-bit. The first kinematics or assembly failure aborts the whole
/// batch; there is no per-pose retry.
///
/// # Errors
///
/// Propagates kinematics failures and assembly contract violations.
pub fn sample_seed_batch<K>(
    profile: &RobotProfile,
    kinematics: &K,
    seed: u64,
    poses_per_seed: usize,
) -> Result<SeedBatch>
where
    K: ForwardKinematics + ?Sized,
{
    let mut sampler = JointSampler::for_seed(seed);
    let mut samples = Vec::with_capacity(poses_per_seed);

    for _ in 0..poses_per_seed {
        let angles = sampler.draw(profile.joint_bounds());
        let link_poses = kinematics.forward_kinematics(&angles)?;
        samples.push(assemble_pose(angles, &link_poses, profile)?);
    }

    debug!(seed, poses = samples.len(), "Seed batch complete");
    Ok(SeedBatch::new(seed, samples))
}

/// Generates batches for seeds `0..num_seeds` in parallel.
///
/// Each seed gets its own random stream, so the output is identical to
/// running [`sample_seed_batch`] sequentially; parallelism changes only the
/// wall-clock time. Batches are returned in seed order.
///
/// # Errors
///
/// Returns the first failing seed's error. Parameters are validated up
/// front.
pub fn sample_seed_batches<K>(
    profile: &RobotProfile,
    kinematics: &K,
    params: &SampleParams,
) -> Result<Vec<SeedBatch>>
where
    K: ForwardKinematics + Sync + ?Sized,
{
    params.validate()?;
    info!(
        robot = %profile.robot(),
        num_seeds = params.num_seeds,
        poses_per_seed = params.poses_per_seed,
        "Generating seed batches"
    );

    let batches: Vec<SeedBatch> = (0..params.num_seeds)
        .into_par_iter()
        .map(|seed| sample_seed_batch(profile, kinematics, seed, params.poses_per_seed))
        .collect::<Result<_>>()?;

    info!(batches = batches.len(), "Seed batch generation complete");
    Ok(batches)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::collections::HashMap;

    use nalgebra::{Point3, UnitQuaternion};

    use retarget_robot::{KeypointRule, KeypointSpec, RobotType};
    use retarget_types::{AngleRange, JointAngleVector, JointBounds, LinkPose, RetargetError};

    use super::*;

    /// A two-link chain: `hand` swings on a unit arm driven by `j`.
    struct SwingArm;

    impl ForwardKinematics for SwingArm {
        fn forward_kinematics(
            &self,
            angles: &JointAngleVector,
        ) -> retarget_types::Result<HashMap<String, LinkPose>> {
            let theta = angles
                .get("j")
                .ok_or_else(|| RetargetError::kinematics("missing joint j"))?;

            let mut poses = HashMap::new();
            poses.insert("base".to_string(), LinkPose::identity());
            poses.insert(
                "hand".to_string(),
                LinkPose::new(
                    Point3::new(theta.cos(), theta.sin(), 0.0),
                    UnitQuaternion::from_euler_angles(0.0, 0.0, theta),
                ),
            );
            Ok(poses)
        }
    }

    /// Fails on every query.
    struct BrokenChain;

    impl ForwardKinematics for BrokenChain {
        fn forward_kinematics(
            &self,
            _angles: &JointAngleVector,
        ) -> retarget_types::Result<HashMap<String, LinkPose>> {
            Err(RetargetError::kinematics("solver offline"))
        }
    }

    fn swing_profile() -> RobotProfile {
        RobotProfile::new(
            RobotType::Reachy,
            JointBounds::from_pairs([("j", AngleRange::new(-1.0, 1.0).unwrap())]),
            vec!["base".to_string(), "hand".to_string()],
            vec![KeypointSpec::new(
                "right_wrist",
                KeypointRule::from_link("hand"),
            )],
            vec!["hand".to_string()],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn params_defaults_and_setters() {
        let params = SampleParams::default();
        assert_eq!(params.num_seeds, 500);
        assert_eq!(params.poses_per_seed, 2000);
        assert_eq!(params.holdout_denominator, 10);
        assert!(params.validate().is_ok());

        let tuned = SampleParams::quick()
            .num_seeds(8)
            .poses_per_seed(32)
            .holdout_denominator(2);
        assert_eq!(tuned.num_seeds, 8);
        assert_eq!(tuned.poses_per_seed, 32);
        assert_eq!(tuned.holdout_denominator, 2);
    }

    #[test]
    fn params_reject_zero_counts() {
        assert!(SampleParams::quick().num_seeds(0).validate().is_err());
        assert!(SampleParams::quick().poses_per_seed(0).validate().is_err());
        assert!(
            SampleParams::quick()
                .holdout_denominator(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn seed_batch_is_reproducible() {
        let profile = swing_profile();
        let a = sample_seed_batch(&profile, &SwingArm, 5, 12).unwrap();
        let b = sample_seed_batch(&profile, &SwingArm, 5, 12).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.seed, 5);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn seed_batch_poses_are_consistent_with_fk() {
        let profile = swing_profile();
        let batch = sample_seed_batch(&profile, &SwingArm, 2, 8).unwrap();

        for sample in &batch.samples {
            let theta = sample.angles().get("j").unwrap();
            let hand = sample.link_positions()[1];
            assert!((hand.x - theta.cos()).abs() < 1e-12);
            assert!((hand.y - theta.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let profile = swing_profile();
        let params = SampleParams::quick().num_seeds(6).poses_per_seed(10);

        let parallel = sample_seed_batches(&profile, &SwingArm, &params).unwrap();
        let sequential: Vec<SeedBatch> = (0..6)
            .map(|seed| sample_seed_batch(&profile, &SwingArm, seed, 10).unwrap())
            .collect();

        assert_eq!(parallel, sequential);
        for (i, batch) in parallel.iter().enumerate() {
            assert_eq!(batch.seed, i as u64);
        }
    }

    #[test]
    fn kinematics_failure_aborts_batch() {
        let profile = swing_profile();
        let result = sample_seed_batch(&profile, &BrokenChain, 0, 4);

        match result {
            Err(SampleError::Retarget(err)) => assert!(err.is_kinematics()),
            other => panic!("expected kinematics failure, got {other:?}"),
        }
    }
}
