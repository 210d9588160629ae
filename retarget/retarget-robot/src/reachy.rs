//! The curated Reachy profile.
//!
//! Tables match the Reachy URDF: 17 sampled joints (7 per arm plus a 3-DoF
//! neck) and 31 links. Keypoint anchors for body parts Reachy does not have
//! (pelvis, hips, knees, spine) are fixed constants chosen so the derived
//! human skeleton stays plausible for a robot standing at its pedestal.

use nalgebra::Vector3;

use retarget_types::{AngleRange, JointBounds};

use crate::error::Result;
use crate::keypoint::{KeypointRule, KeypointSpec};
use crate::profile::{LimbVector, RobotProfile};
use crate::robot::RobotType;

/// Joint limits in radians, from the URDF.
const JOINT_RANGES: [(&str, f64, f64); 17] = [
    ("r_shoulder_pitch", -2.618, 1.57),
    ("r_shoulder_roll", -3.14, 0.174),
    ("r_arm_yaw", -1.57, 1.57),
    ("r_elbow_pitch", -2.182, 0.0),
    ("r_forearm_yaw", -1.745, 1.745),
    ("r_wrist_pitch", -0.785, 0.785),
    ("r_wrist_roll", -0.785, 0.785),
    ("l_shoulder_pitch", -2.618, 1.57),
    ("l_shoulder_roll", -0.174, 3.14),
    ("l_arm_yaw", -1.57, 1.57),
    ("l_elbow_pitch", -2.182, 0.0),
    ("l_forearm_yaw", -1.745, 1.745),
    ("l_wrist_pitch", -0.785, 0.785),
    ("l_wrist_roll", -0.785, 0.785),
    ("neck_roll", -0.4, 0.4),
    ("neck_pitch", -0.4, 0.55),
    ("neck_yaw", -1.4, 1.4),
];

/// The 31 links of the chain, in canonical array order.
const LINK_ORDER: [&str; 31] = [
    "pedestal",
    "torso",
    "r_shoulder",
    "r_shoulder_x",
    "r_upper_arm",
    "r_forearm",
    "r_wrist",
    "r_wrist2hand",
    "r_gripper_thumb",
    "r_gripper_finger",
    "right_tip",
    "l_shoulder",
    "l_shoulder_x",
    "l_upper_arm",
    "l_forearm",
    "l_wrist",
    "l_wrist2hand",
    "l_gripper_thumb",
    "l_gripper_finger",
    "left_tip",
    "head_x",
    "head_y",
    "head_z",
    "head",
    "r_antenna_link",
    "l_antenna_link",
    "left_camera",
    "right_camera",
    "top_neck_arm",
    "middle_neck_arm",
    "bottom_neck_arm",
];

/// Links scored by the link-distance metric: the distal ends of both arms
/// plus the head, where retargeting error is visible.
const EVALUATION_LINKS: [&str; 7] = [
    "r_forearm",
    "r_wrist2hand",
    "right_tip",
    "l_forearm",
    "l_wrist2hand",
    "left_tip",
    "head",
];

/// Builds the curated profile.
pub(crate) fn build() -> Result<RobotProfile> {
    let mut bounds = JointBounds::new();
    for (joint, min, max) in JOINT_RANGES {
        bounds.insert(joint, AngleRange::new(min, max)?);
    }

    let eye_offset = Vector3::new(-0.01, 0.0, 0.0);
    let keypoints = vec![
        KeypointSpec::new("pelvis", KeypointRule::constant(0.0, 0.0, 0.65)),
        KeypointSpec::new("right_hip", KeypointRule::constant(0.0, -0.1, 0.65)),
        KeypointSpec::new("left_hip", KeypointRule::constant(0.0, 0.1, 0.65)),
        KeypointSpec::new("right_knee", KeypointRule::constant(0.0, -0.1, 0.36)),
        KeypointSpec::new("left_knee", KeypointRule::constant(0.0, 0.1, 0.36)),
        KeypointSpec::new("spine3", KeypointRule::constant(0.0, 0.0, 0.9)),
        KeypointSpec::new("neck", KeypointRule::constant(0.0, 0.0, 1.05)),
        KeypointSpec::new("right_shoulder", KeypointRule::from_link("r_shoulder")),
        KeypointSpec::new("right_elbow", KeypointRule::from_link("r_forearm")),
        KeypointSpec::new("right_wrist", KeypointRule::from_link("r_wrist2hand")),
        KeypointSpec::new("right_thumb2", KeypointRule::from_link("r_gripper_thumb")),
        KeypointSpec::new("right_index1", KeypointRule::from_link("r_gripper_finger")),
        KeypointSpec::new("right_index3", KeypointRule::from_link("right_tip")),
        KeypointSpec::new("left_shoulder", KeypointRule::from_link("l_shoulder")),
        KeypointSpec::new("left_elbow", KeypointRule::from_link("l_forearm")),
        KeypointSpec::new("left_wrist", KeypointRule::from_link("l_wrist2hand")),
        KeypointSpec::new("left_thumb2", KeypointRule::from_link("l_gripper_thumb")),
        KeypointSpec::new("left_index1", KeypointRule::from_link("l_gripper_finger")),
        KeypointSpec::new("left_index3", KeypointRule::from_link("left_tip")),
        // Cameras sit a centimeter behind where the eyes read best.
        KeypointSpec::new(
            "right_eye",
            KeypointRule::from_link_offset("right_camera", eye_offset),
        ),
        KeypointSpec::new(
            "left_eye",
            KeypointRule::from_link_offset("left_camera", eye_offset),
        ),
    ];

    let limb_vectors = vec![
        LimbVector::new("r_shoulder", "r_forearm"),
        LimbVector::new("r_forearm", "r_wrist2hand"),
        LimbVector::new("r_wrist2hand", "right_tip"),
        LimbVector::new("l_shoulder", "l_forearm"),
        LimbVector::new("l_forearm", "l_wrist2hand"),
        LimbVector::new("l_wrist2hand", "left_tip"),
        LimbVector::new("torso", "head"),
    ];

    RobotProfile::new(
        RobotType::Reachy,
        bounds,
        LINK_ORDER.iter().map(|link| (*link).to_string()).collect(),
        keypoints,
        EVALUATION_LINKS
            .iter()
            .map(|link| (*link).to_string())
            .collect(),
        limb_vectors,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use nalgebra::Point3;

    use super::*;

    #[test]
    fn reachy_table_sizes() {
        let profile = build().unwrap();
        assert_eq!(profile.joint_count(), 17);
        assert_eq!(profile.link_count(), 31);
        assert_eq!(profile.keypoint_count(), 21);
        assert_eq!(profile.angle_dim(), 17);
        assert_eq!(profile.position_dim(), 93);
        assert_eq!(profile.rotation_dim(), 186);
        assert_eq!(profile.keypoint_dim(), 63);
    }

    #[test]
    fn reachy_joint_ranges_spot_checks() {
        let profile = build().unwrap();
        let bounds = profile.joint_bounds();

        let shoulder = bounds.get("r_shoulder_pitch").unwrap();
        assert_eq!(shoulder.min(), -2.618);
        assert_eq!(shoulder.max(), 1.57);

        // Shoulder rolls mirror across sides.
        let right_roll = bounds.get("r_shoulder_roll").unwrap();
        let left_roll = bounds.get("l_shoulder_roll").unwrap();
        assert_eq!(right_roll.min(), -left_roll.max());
        assert_eq!(right_roll.max(), -left_roll.min());

        let neck_pitch = bounds.get("neck_pitch").unwrap();
        assert_eq!(neck_pitch.min(), -0.4);
        assert_eq!(neck_pitch.max(), 0.55);

        // Elbows only flex one way.
        assert_eq!(bounds.get("r_elbow_pitch").unwrap().max(), 0.0);
        assert_eq!(bounds.get("l_elbow_pitch").unwrap().max(), 0.0);
    }

    #[test]
    fn reachy_link_order_spot_checks() {
        let profile = build().unwrap();
        assert_eq!(profile.link_index("pedestal"), Some(0));
        assert_eq!(profile.link_index("torso"), Some(1));
        assert_eq!(profile.link_index("r_shoulder"), Some(2));
        assert_eq!(profile.link_index("right_tip"), Some(10));
        assert_eq!(profile.link_index("left_camera"), Some(26));
        assert_eq!(profile.link_index("right_camera"), Some(27));
        assert_eq!(profile.link_index("bottom_neck_arm"), Some(30));
    }

    #[test]
    fn reachy_keypoint_order() {
        let profile = build().unwrap();
        let names: Vec<&str> = profile
            .keypoints()
            .iter()
            .map(|spec| spec.name.as_str())
            .collect();

        assert_eq!(names[0], "pelvis");
        assert_eq!(names[6], "neck");
        assert_eq!(names[7], "right_shoulder");
        assert_eq!(names[13], "left_shoulder");
        assert_eq!(names[19], "right_eye");
        assert_eq!(names[20], "left_eye");
    }

    #[test]
    fn reachy_derive_keypoints_on_synthetic_positions() {
        let profile = build().unwrap();

        // Give link i the position (i, 0, 0) so sources are recognizable.
        let positions: Vec<Point3<f64>> = (0..31)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();
        let keypoints = profile.derive_keypoints(&positions).unwrap();

        // Pinned anchors come through untouched.
        assert_eq!(keypoints[0], Point3::new(0.0, 0.0, 0.65));
        assert_eq!(keypoints[3], Point3::new(0.0, -0.1, 0.36));
        // right_shoulder reads link 2, left_index3 reads link 19.
        assert_eq!(keypoints[7], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(keypoints[18], Point3::new(19.0, 0.0, 0.0));
        // Eyes read the cameras (links 27 and 26) with the x backset.
        assert_eq!(keypoints[19], Point3::new(26.99, 0.0, 0.0));
        assert_eq!(keypoints[20], Point3::new(25.99, 0.0, 0.0));
    }

    #[test]
    fn reachy_metric_tables_validate() {
        let profile = build().unwrap();
        assert_eq!(profile.evaluation_links().len(), 7);
        assert_eq!(profile.limb_vectors().len(), 7);
        profile.validate().unwrap();
    }
}
