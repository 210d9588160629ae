//! The three motion comparison metrics.

use std::collections::HashMap;
use std::f64::consts::TAU;

use nalgebra::Vector3;
use tracing::debug;

use retarget_robot::RobotProfile;
use retarget_types::{ForwardKinematics, JointAngleVector, LinkPose, MotionSequence, RetargetError};

use crate::error::{EvalError, Result};
use crate::mode::CompareMode;

/// Shortest circular distance between two angles, in radians.
///
/// Raw subtraction is discontinuous at the pi boundary: `pi - epsilon` and
/// `-pi + epsilon` differ by nearly `2 pi` numerically but by `2 epsilon` on
/// the circle. This folds the difference onto `[0, pi]`.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use retarget_eval::wrapped_angle_distance;
///
/// let d = wrapped_angle_distance(PI - 0.01, -PI + 0.01);
/// assert!((d - 0.02).abs() < 1e-12);
/// ```
#[must_use]
pub fn wrapped_angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

/// Scores a predicted motion against ground truth with the chosen metric.
///
/// All three metrics return a non-negative scalar where 0 is a perfect
/// match, averaged uniformly over frames. [`CompareMode::Joint`] is bounded
/// by pi and never queries `kinematics`; the other two solve forward
/// kinematics for every frame on both sides.
///
/// # Errors
///
/// - [`EvalError::LengthMismatch`] / [`EvalError::EmptyMotion`] when the
///   sequences disagree on length or hold no frames.
/// - [`EvalError::NoCommonJoints`] (joint mode) when the sequences share no
///   joint names.
/// - [`EvalError::NoEvaluationLinks`] / [`EvalError::NoLimbVectors`] when
///   the profile leaves the relevant link set empty.
/// - [`EvalError::ZeroLengthLimb`] (cosine mode) when a limb direction has
///   no length to normalize.
/// - Kinematics failures and missing links propagate via
///   [`EvalError::Retarget`]; the comparison aborts on the first one.
pub fn compare<K>(
    mode: CompareMode,
    predicted: &MotionSequence,
    ground_truth: &MotionSequence,
    profile: &RobotProfile,
    kinematics: &K,
) -> Result<f64>
where
    K: ForwardKinematics + ?Sized,
{
    if predicted.len() != ground_truth.len() {
        return Err(EvalError::LengthMismatch {
            predicted: predicted.len(),
            ground_truth: ground_truth.len(),
        });
    }
    if predicted.is_empty() {
        return Err(EvalError::EmptyMotion);
    }

    debug!(%mode, frames = predicted.len(), "Comparing motions");
    match mode {
        CompareMode::Joint => joint_error(predicted, ground_truth),
        CompareMode::Link => link_error(predicted, ground_truth, profile, kinematics),
        CompareMode::Cosine => cosine_error(predicted, ground_truth, profile, kinematics),
    }
}

/// Mean circular joint distance over common joints, then over frames.
fn joint_error(predicted: &MotionSequence, ground_truth: &MotionSequence) -> Result<f64> {
    // The joint set is fixed over a motion, so the first frames decide it.
    let common = match (predicted.get(0), ground_truth.get(0)) {
        (Some(p), Some(g)) => p.common_joints(g),
        _ => Vec::new(),
    };
    if common.is_empty() {
        return Err(EvalError::NoCommonJoints);
    }

    let mut total = 0.0;
    for (pred, gt) in predicted.iter().zip(ground_truth) {
        let mut frame_sum = 0.0;
        let mut joints = 0usize;
        for name in &common {
            if let (Some(p), Some(g)) = (pred.get(name), gt.get(name)) {
                frame_sum += wrapped_angle_distance(p, g);
                joints += 1;
            }
        }
        if joints == 0 {
            return Err(EvalError::NoCommonJoints);
        }
        total += frame_sum / joints as f64;
    }
    Ok(total / predicted.len() as f64)
}

/// Mean Euclidean distance over evaluation links, then over frames.
fn link_error<K>(
    predicted: &MotionSequence,
    ground_truth: &MotionSequence,
    profile: &RobotProfile,
    kinematics: &K,
) -> Result<f64>
where
    K: ForwardKinematics + ?Sized,
{
    let links = profile.evaluation_links();
    if links.is_empty() {
        return Err(EvalError::NoEvaluationLinks);
    }

    let mut total = 0.0;
    for (pred, gt) in predicted.iter().zip(ground_truth) {
        let pred_poses = kinematics.forward_kinematics(pred)?;
        let gt_poses = kinematics.forward_kinematics(gt)?;

        let mut frame_sum = 0.0;
        for link in links {
            let p = link_position(&pred_poses, link)?;
            let g = link_position(&gt_poses, link)?;
            frame_sum += (p - g).norm();
        }
        total += frame_sum / links.len() as f64;
    }
    Ok(total / predicted.len() as f64)
}

/// One minus the cosine similarity of concatenated limb directions, averaged
/// over frames.
fn cosine_error<K>(
    predicted: &MotionSequence,
    ground_truth: &MotionSequence,
    profile: &RobotProfile,
    kinematics: &K,
) -> Result<f64>
where
    K: ForwardKinematics + ?Sized,
{
    let limbs = profile.limb_vectors();
    if limbs.is_empty() {
        return Err(EvalError::NoLimbVectors);
    }

    let mut total = 0.0;
    for (pred, gt) in predicted.iter().zip(ground_truth) {
        let pred_dirs = limb_directions(pred, profile, kinematics)?;
        let gt_dirs = limb_directions(gt, profile, kinematics)?;

        // Each entry is unit length, so the concatenations have norm
        // sqrt(limbs) and the division below is safe.
        let dot: f64 = pred_dirs.iter().zip(&gt_dirs).map(|(p, g)| p * g).sum();
        let norm_sq = limbs.len() as f64;
        total += 1.0 - dot / norm_sq;
    }
    Ok(total / predicted.len() as f64)
}

/// Unit limb directions for one frame, flattened in profile limb order.
fn limb_directions<K>(
    frame: &JointAngleVector,
    profile: &RobotProfile,
    kinematics: &K,
) -> Result<Vec<f64>>
where
    K: ForwardKinematics + ?Sized,
{
    let poses = kinematics.forward_kinematics(frame)?;

    let mut flat = Vec::with_capacity(profile.limb_vectors().len() * 3);
    for limb in profile.limb_vectors() {
        let from = link_position(&poses, &limb.from)?;
        let to = link_position(&poses, &limb.to)?;

        let direction: Vector3<f64> = to - from;
        let norm = direction.norm();
        if norm == 0.0 {
            return Err(EvalError::zero_length_limb(&limb.from, &limb.to));
        }
        flat.extend((direction / norm).iter().copied());
    }
    Ok(flat)
}

fn link_position(
    poses: &HashMap<String, LinkPose>,
    link: &str,
) -> Result<nalgebra::Point3<f64>> {
    poses
        .get(link)
        .map(|pose| pose.position)
        .ok_or_else(|| RetargetError::link_not_found(link).into())
}
