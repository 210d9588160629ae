//! Keypoint derivation rules.
//!
//! A robot pose is translated into the canonical human keypoint set by a
//! per-keypoint rule. Keypoints the robot can actually move come from chain
//! links; keypoints with no robot counterpart (legs on an armless robot) are
//! pinned to fixed anchors so the human-side skeleton stays well-formed.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// How one canonical human keypoint is derived from a robot pose.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use retarget_robot::KeypointRule;
///
/// let pelvis = KeypointRule::constant(0.0, 0.0, 0.65);
/// let eye = KeypointRule::from_link_offset("right_camera", Vector3::new(-0.01, 0.0, 0.0));
/// assert_eq!(pelvis.link(), None);
/// assert_eq!(eye.link(), Some("right_camera"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeypointRule {
    /// A fixed world-frame anchor.
    Constant {
        /// Anchor position in meters.
        position: Point3<f64>,
    },
    /// A link position plus a constant offset.
    FromLink {
        /// Link whose world position anchors the keypoint.
        link: String,
        /// Offset added to the link position, in meters.
        offset: Vector3<f64>,
    },
}

impl KeypointRule {
    /// Creates a fixed-anchor rule.
    #[must_use]
    pub fn constant(x: f64, y: f64, z: f64) -> Self {
        Self::Constant {
            position: Point3::new(x, y, z),
        }
    }

    /// Creates a rule that copies a link position.
    #[must_use]
    pub fn from_link(link: impl Into<String>) -> Self {
        Self::FromLink {
            link: link.into(),
            offset: Vector3::zeros(),
        }
    }

    /// Creates a rule that offsets a link position.
    #[must_use]
    pub fn from_link_offset(link: impl Into<String>, offset: Vector3<f64>) -> Self {
        Self::FromLink {
            link: link.into(),
            offset,
        }
    }

    /// The link this rule reads, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Constant { .. } => None,
            Self::FromLink { link, .. } => Some(link),
        }
    }
}

/// A named keypoint and the rule that derives it.
///
/// Names follow the SMPL-X joint the keypoint approximates (`pelvis`,
/// `right_elbow`, `left_eye`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypointSpec {
    /// SMPL-X joint name.
    pub name: String,
    /// Derivation rule.
    pub rule: KeypointRule,
}

impl KeypointSpec {
    /// Creates a named keypoint spec.
    #[must_use]
    pub fn new(name: impl Into<String>, rule: KeypointRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rule_constant_has_no_link() {
        let rule = KeypointRule::constant(0.0, -0.1, 0.36);
        assert_eq!(rule.link(), None);
        match rule {
            KeypointRule::Constant { position } => {
                assert_eq!(position, Point3::new(0.0, -0.1, 0.36));
            }
            KeypointRule::FromLink { .. } => panic!("expected constant rule"),
        }
    }

    #[test]
    fn rule_from_link_zero_offset() {
        let rule = KeypointRule::from_link("r_shoulder");
        assert_eq!(rule.link(), Some("r_shoulder"));
        match rule {
            KeypointRule::FromLink { offset, .. } => assert_eq!(offset, Vector3::zeros()),
            KeypointRule::Constant { .. } => panic!("expected link rule"),
        }
    }

    #[test]
    fn rule_serde_tagged() {
        let rule = KeypointRule::from_link_offset("left_camera", Vector3::new(-0.01, 0.0, 0.0));
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"kind\":\"from_link\""));

        let parsed: KeypointRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn spec_carries_name() {
        let spec = KeypointSpec::new("pelvis", KeypointRule::constant(0.0, 0.0, 0.65));
        assert_eq!(spec.name, "pelvis");
    }
}
