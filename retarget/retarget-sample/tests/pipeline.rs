//! End-to-end pipeline tests: sample, assemble, resample, split, archive.
//!
//! Run with: cargo test -p retarget-sample --test pipeline

use std::collections::HashMap;

use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use retarget_robot::{KeypointRule, KeypointSpec, RobotProfile, RobotType};
use retarget_sample::{
    JointSampler, SampleParams, balance_batch, read_angle_records, read_seed_archive,
    sample_seed_batch, sample_seed_batches, split_holdout, write_seed_archive,
};
use retarget_types::{
    AngleRange, ForwardKinematics, JointAngleVector, JointBounds, LinkPose, Rotation6,
};

/// One fixed link `L` at `(1, 0, 0)` with identity orientation, regardless
/// of the input angles.
struct FixedLink;

impl ForwardKinematics for FixedLink {
    fn forward_kinematics(
        &self,
        _angles: &JointAngleVector,
    ) -> retarget_types::Result<HashMap<String, LinkPose>> {
        Ok(HashMap::from([(
            "L".to_string(),
            LinkPose::from_position(Point3::new(1.0, 0.0, 0.0)),
        )]))
    }
}

fn one_joint_profile() -> RobotProfile {
    RobotProfile::new(
        RobotType::Reachy,
        JointBounds::from_pairs([("a", AngleRange::new(-1.0, 1.0).unwrap())]),
        vec!["L".to_string()],
        vec![KeypointSpec::new(
            "right_wrist",
            KeypointRule::from_link("L"),
        )],
        vec!["L".to_string()],
        Vec::new(),
    )
    .unwrap()
}

#[test]
fn seed_zero_reproduces_three_draws_exactly() {
    let bounds = JointBounds::from_pairs([("a", AngleRange::new(-1.0, 1.0).unwrap())]);

    let first = JointSampler::for_seed(0).draw_many(&bounds, 3);
    let second = JointSampler::for_seed(0).draw_many(&bounds, 3);

    assert_eq!(first, second);
    for angles in &first {
        let a = angles.get("a").unwrap();
        assert!((-1.0..=1.0).contains(&a));
    }
}

#[test]
fn fixed_link_pose_assembles_to_expected_arrays() {
    let profile = one_joint_profile();
    let batch = sample_seed_batch(&profile, &FixedLink, 0, 3).unwrap();

    assert_eq!(batch.len(), 3);
    for sample in &batch.samples {
        assert_eq!(sample.link_positions(), [Point3::new(1.0, 0.0, 0.0)]);
        // Identity orientation: the first two matrix columns.
        assert_eq!(
            sample.link_rotations(),
            [Rotation6::from_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])]
        );
        assert_eq!(sample.keypoints(), [Point3::new(1.0, 0.0, 0.0)]);
    }

    // Same seed, same batch, bit for bit.
    let again = sample_seed_batch(&profile, &FixedLink, 0, 3).unwrap();
    assert_eq!(batch, again);
}

#[test]
fn generate_split_and_archive_round_trip() {
    let profile = one_joint_profile();
    let params = SampleParams::quick().num_seeds(8).poses_per_seed(5);

    let batches = sample_seed_batches(&profile, &FixedLink, &params).unwrap();
    assert_eq!(batches.len(), 8);

    let (train, test) = split_holdout(batches.clone(), params.holdout_denominator).unwrap();
    assert_eq!(test.len(), 2);
    assert_eq!(train.len(), 6);
    assert_eq!(test[0].seed, 0);
    assert_eq!(train[0].seed, 2);

    let dir = tempfile::tempdir().unwrap();
    for batch in &batches {
        write_seed_archive(dir.path(), batch).unwrap();
    }

    for batch in &batches {
        let archive = read_seed_archive(dir.path(), batch.seed).unwrap();
        assert_eq!(archive.arrays.len(), 5);
        assert_eq!(archive.arrays.positions[0][0], [1.0, 0.0, 0.0]);
        assert_eq!(archive.arrays.rotations[0][0], [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

        let records = read_angle_records(dir.path(), batch.seed).unwrap();
        let stored: Vec<JointAngleVector> = batch
            .samples
            .iter()
            .map(|sample| sample.angles().clone())
            .collect();
        assert_eq!(records.angles, stored);
    }
}

#[test]
fn density_balancing_shrinks_a_generated_batch() {
    let profile = one_joint_profile();
    let batch = sample_seed_batch(&profile, &FixedLink, 1, 20).unwrap();

    // Weight later poses more heavily; index 0 is excluded by convention.
    let scores: Vec<f64> = (0..20).map(|i| 0.1 + f64::from(i)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let balanced = balance_batch(&batch, &scores, 8, &mut rng).unwrap();
    assert_eq!(balanced.seed, 1);
    assert_eq!(balanced.len(), 8);
    for sample in &balanced.samples {
        assert!(batch.samples.contains(sample));
    }
}
