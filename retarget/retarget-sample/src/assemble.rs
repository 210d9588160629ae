//! Pose assembly: one FK result, every derived representation.

use std::collections::HashMap;

use nalgebra::Point3;

use retarget_robot::RobotProfile;
use retarget_types::{JointAngleVector, LinkPose, PoseSample, RetargetError, Rotation6};

use crate::error::Result;

/// Assembles a [`PoseSample`] from one forward kinematics evaluation.
///
/// Walks the profile's canonical link ordering, gathering positions and
/// converting orientations to the 6-D representation, then derives the
/// human keypoints from the positions. One FK call therefore feeds all
/// three output arrays, and their layouts agree with the profile's
/// dimension helpers by construction.
///
/// # Errors
///
/// Returns [`RetargetError::LinkNotFound`] (wrapped) when the FK result is
/// missing a link the profile expects. That is a contract violation by the
/// kinematics collaborator and aborts the enclosing batch.
pub fn assemble_pose(
    angles: JointAngleVector,
    link_poses: &HashMap<String, LinkPose>,
    profile: &RobotProfile,
) -> Result<PoseSample> {
    let mut positions: Vec<Point3<f64>> = Vec::with_capacity(profile.link_count());
    let mut rotations: Vec<Rotation6> = Vec::with_capacity(profile.link_count());

    for link in profile.link_order() {
        let pose = link_poses
            .get(link)
            .ok_or_else(|| RetargetError::link_not_found(link))?;
        positions.push(pose.position);
        rotations.push(pose.rotation_6d());
    }

    let keypoints = profile.derive_keypoints(&positions)?;
    Ok(PoseSample::new(angles, positions, rotations, keypoints)?)
}
